pub use type_safety_derive::Annotated;

/// The declared type of one named field, recorded by `#[derive(Annotated)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annotation {
    pub name: &'static str,
    /// The type as written in the struct definition.
    pub source: &'static str,
    /// The fully qualified type the compiler resolved `source` to.
    pub resolved: &'static str,
    /// The type mentions the struct it is declared in.
    pub self_referential: bool,
}

pub trait Annotated {
    /// One entry per named field, in declaration order.
    fn annotations() -> Vec<Annotation>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationFormat {
    /// Fully resolved paths, e.g. `core::option::Option<alloc::boxed::Box<..>>`.
    Value,
    /// The type exactly as the author wrote it.
    Source,
}

impl Annotation {
    pub fn render(&self, format: AnnotationFormat) -> &'static str {
        match format {
            AnnotationFormat::Value => self.resolved,
            AnnotationFormat::Source => self.source,
        }
    }
}

pub fn get_annotations<T: Annotated>(format: AnnotationFormat) -> Vec<(&'static str, String)> {
    T::annotations()
        .into_iter()
        .map(|a| (a.name, a.render(format).to_string()))
        .collect()
}

/// Builds a readable report of `T`'s field annotations in both formats.
pub fn inspect_annotations<T: Annotated>() -> String {
    let annotations = T::annotations();
    let mut lines = Vec::new();

    for (title, format) in [
        ("VALUE format (resolved)", AnnotationFormat::Value),
        ("SOURCE format (as written)", AnnotationFormat::Source),
    ] {
        lines.push(format!("{title}:"));
        lines.extend(annotations.iter().map(|annotation| {
            let marker = if annotation.self_referential {
                " (self reference)"
            } else {
                ""
            };
            format!("  {}: {}{marker}", annotation.name, annotation.render(format))
        }));
    }

    lines.into_iter().map(|line| line + "\n").collect()
}

#[cfg(test)]
mod tests {
    use crate::node::Node;

    use super::*;

    #[derive(Annotated)]
    #[allow(dead_code)]
    struct Pair<A, B> {
        left: A,
        right: Vec<B>,
    }

    #[derive(Annotated)]
    #[allow(dead_code)]
    struct Tree {
        children: Vec<Self>,
        label: String,
    }

    #[test]
    fn node_source_annotations() {
        assert_eq!(
            vec![
                ("value", "i64".to_string()),
                ("next", "Option<Box<Node>>".to_string())
            ],
            get_annotations::<Node>(AnnotationFormat::Source)
        );
    }

    #[test]
    fn node_value_annotations_are_resolved() {
        let annotations = get_annotations::<Node>(AnnotationFormat::Value);

        assert_eq!(("value", "i64".to_string()), annotations[0]);
        let (name, ty) = &annotations[1];
        assert_eq!("next", *name);
        assert!(ty.starts_with("core::option::Option<"), "got {ty}");
        assert!(ty.contains("type_safety::node::Node"), "got {ty}");
    }

    #[test]
    fn flags_self_references() {
        let node = Node::annotations();
        assert!(!node[0].self_referential);
        assert!(node[1].self_referential);

        let tree = Tree::annotations();
        assert!(tree[0].self_referential);
        assert!(!tree[1].self_referential);
    }

    #[test]
    fn generic_fields_resolve_to_concrete_types() {
        let annotations = Pair::<u8, String>::annotations();

        assert_eq!("A", annotations[0].source);
        assert_eq!("u8", annotations[0].resolved);
        assert_eq!("Vec<B>", annotations[1].source);
        assert_eq!("alloc::vec::Vec<alloc::string::String>", annotations[1].resolved);
    }

    #[test]
    fn report_lists_both_formats() {
        let report = inspect_annotations::<Node>();

        assert!(report.contains("VALUE format"));
        assert!(report.contains("SOURCE format"));
        assert!(report.contains("  value: i64\n"));
        assert!(report.contains("  next: Option<Box<Node>> (self reference)\n"));
    }

    #[test]
    fn report_has_one_line_per_field_and_format() {
        let report = inspect_annotations::<Node>();

        assert_eq!(6, report.lines().count());
        assert!(report.starts_with("VALUE format (resolved):\n"));
        assert!(report.ends_with('\n'));
        assert_eq!(2, report.matches("(self reference)").count());
    }
}
