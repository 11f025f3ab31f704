use type_safety::{config::DemoConfig, demo, tracing_init};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_init::init()?;

    let config = DemoConfig::load()?;

    let report = demo::run(&config).await?;
    println!("{report}");

    Ok(())
}
