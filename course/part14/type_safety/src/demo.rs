use std::fmt::{Debug, Write};

use tracing::info;

use crate::{
    annotations::inspect_annotations,
    config::DemoConfig,
    drawable::{render, Drawable},
    node::Node,
    process::try_async_process,
    stack::Stack,
};

const RULE: &str = "============================================================";

/// Runs every section of the lesson in order and returns what it printed.
pub async fn run(config: &DemoConfig) -> anyhow::Result<String> {
    let mut out = String::new();

    writeln!(out, "{RULE}")?;
    writeln!(out, "Type safety demo v{}", crate::VERSION)?;
    writeln!(out, "{RULE}")?;

    info!("forward references");
    writeln!(out, "\n[1] Forward references:")?;
    let node = Node::with_next(2, Node::new(1));
    writeln!(out, "  linked nodes: {node}")?;

    info!("annotation introspection");
    writeln!(out, "\n[2] Annotation introspection:")?;
    for line in inspect_annotations::<Node>().lines() {
        writeln!(out, "  {line}")?;
    }

    info!("generics");
    writeln!(out, "\n[3] Generic stacks:")?;
    stack_section(&mut out, "int stack", config.int_items.iter().copied())?;
    stack_section(&mut out, "string stack", config.str_items.iter().cloned())?;

    info!("structural typing");
    writeln!(out, "\n[4] Structural typing:")?;
    for shape in &config.shapes {
        let drawable: Box<dyn Drawable> = (*shape).into();
        writeln!(out, "  {}", render(drawable.as_ref()))?;
    }

    info!("async processing");
    writeln!(out, "\n[5] Async processing:")?;
    let processed = try_async_process(
        futures::stream::iter(config.process_items.iter().copied()),
        |x| async move {
            tokio::task::yield_now().await;
            x.checked_mul(2)
                .ok_or_else(|| anyhow::anyhow!("doubling {x} overflows i64"))
        },
    )
    .await?;
    writeln!(out, "  {:?} -> {processed:?}", config.process_items)?;

    writeln!(out, "\n{RULE}")?;
    writeln!(out, "All demos finished!")?;
    write!(out, "{RULE}")?;

    Ok(out)
}

fn stack_section<T: Debug>(
    out: &mut String,
    label: &str,
    items: impl IntoIterator<Item = T>,
) -> anyhow::Result<()> {
    let mut stack = items.into_iter().collect::<Stack<T>>();
    writeln!(out, "  {label} top: {:?}", stack.peek())?;

    let mut popped = Vec::with_capacity(stack.len());
    while !stack.is_empty() {
        popped.push(stack.pop()?);
    }
    writeln!(out, "  {label} popped: {popped:?}")?;

    Ok(())
}
