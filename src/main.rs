use coffee_harvest::configuration::get_configuration;
use coffee_harvest::startup::Application;
use coffee_harvest::telemetry::init_subscriber;
use dotenv::dotenv;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_subscriber("info");

    let configuration = get_configuration()?;
    let application = Application::build(configuration).await?;
    tracing::info!("Listening on port {}", application.port());
    application.run_until_stopped().await?;

    Ok(())
}
