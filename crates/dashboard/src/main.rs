use moliya_dashboard::{app, config, error::Result, logging};

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load()?;
    logging::init(&config)?;
    let mut app = app::App::new(&config)?;
    app.run().await?;
    Ok(())
}
