use type_safety::{
    annotations::{get_annotations, Annotated, AnnotationFormat},
    config::DemoConfig,
    demo,
    drawable::{render, MockDrawable},
    stack::{Stack, StackError},
};

#[test]
fn version_is_defined() {
    assert_eq!("0.1.0", type_safety::VERSION);
}

#[test]
fn module_attributes_are_present() {
    assert!(!type_safety::AUTHOR.is_empty());
    assert!(!type_safety::EMAIL.is_empty());
    assert!(type_safety::EMAIL.contains('@'));
}

#[test]
fn stack_from_outside_the_crate() {
    let mut stack = Stack::new();
    stack.push("hello".to_string());
    stack.push("world".to_string());

    assert_eq!(Some(&"world".to_string()), stack.peek());
    assert_eq!(Ok("world".to_string()), stack.pop());
    assert_eq!(Ok("hello".to_string()), stack.pop());
    assert_eq!(Err(StackError::Empty), stack.pop());
}

#[derive(Annotated)]
#[allow(dead_code)]
struct Employee {
    name: String,
    manager: Option<Box<Employee>>,
    reports: Vec<Employee>,
}

#[test]
fn derive_works_in_downstream_crates() {
    assert_eq!(
        vec![
            ("name", "String".to_string()),
            ("manager", "Option<Box<Employee>>".to_string()),
            ("reports", "Vec<Employee>".to_string()),
        ],
        get_annotations::<Employee>(AnnotationFormat::Source)
    );

    let self_refs = Employee::annotations()
        .into_iter()
        .filter(|a| a.self_referential)
        .map(|a| a.name)
        .collect::<Vec<_>>();
    assert_eq!(vec!["manager", "reports"], self_refs);
}

#[test]
fn render_calls_draw_once() {
    let mut shape = MockDrawable::new();
    shape
        .expect_draw()
        .returning(|| "Star(points=5)".to_string())
        .times(1);

    assert_eq!("Rendering: Star(points=5)", render(&shape));
}

#[tokio::test]
async fn demo_runs_with_defaults() -> anyhow::Result<()> {
    let report = demo::run(&DemoConfig::default()).await?;

    assert!(report.contains("All demos finished!"));

    Ok(())
}
