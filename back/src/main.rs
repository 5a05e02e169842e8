#[macro_use(trace, debug, info, warn, error)]
extern crate log;

#[macro_use(lazy_static)]
extern crate lazy_static;

mod catchers;
mod config;
mod error;
mod media;
mod response;
mod routes;
#[cfg(test)]
mod test_support;
mod views;

// Needed for tests
pub async fn build_rocket(
    figment: rocket::figment::Figment,
) -> Result<rocket::Rocket<rocket::Ignite>, error::StartupError> {
    let config = config::UploadConfig::from_figment(&figment)?;
    config.prepare_media_dir()?;
    let views = views::Views::load(&config.views_dir)?;

    let rocket = rocket::custom(figment)
        .manage(config)
        .manage(views)
        .register(
            "/upload",
            rocket::catchers![
                catchers::upload_400,
                catchers::upload_413,
                catchers::upload_415,
                catchers::upload_422
            ],
        )
        .mount(
            "/",
            rocket::routes![routes::root, routes::upload_form, routes::api_upload],
        )
        .ignite()
        .await?;

    Ok(rocket)
}

#[rocket::main]
async fn main() -> std::process::ExitCode {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,rocket=warn")),
        )
        .init();

    // Small print to show the start of the program log
    trace!(
        "\n╭{line}╮\n│{message:^30}│\n╰{line}╯",
        line = "─".repeat(30),
        message = "Program start"
    );

    let rocket = match build_rocket(rocket::Config::figment()).await {
        Ok(rocket) => rocket,
        Err(e) => {
            error!("Failled to build the server: {e}");
            return std::process::ExitCode::FAILURE;
        }
    };

    display_config(&rocket);

    if let Err(e) = rocket.launch().await {
        error!("Server stopped with an error: {e}");
        return std::process::ExitCode::FAILURE;
    }

    std::process::ExitCode::SUCCESS
}

/// Displays the config in the console
fn display_config(rocket: &rocket::Rocket<rocket::Ignite>) {
    let rocket_cfg = rocket.config();
    let profile = rocket_cfg.profile.as_str().as_str();
    let address = rocket_cfg.address;
    let port = rocket_cfg.port;
    let workers = rocket_cfg.workers;
    let limits = ["data-form", "file", "form"]
        .iter()
        .map(|limit_name| {
            format!(
                "{limit_name}: {}",
                rocket_cfg
                    .limits
                    .get(limit_name)
                    .unwrap_or(rocket::data::ByteUnit::from(0))
            )
        })
        .collect::<Vec<String>>();

    let (media_dir, views_dir) = rocket
        .state::<config::UploadConfig>()
        .map(|cfg| {
            (
                cfg.media_dir.display().to_string(),
                cfg.views_dir.display().to_string(),
            )
        })
        .unwrap_or_else(|| ("[ERROR] Undefined".to_string(), "[ERROR] Undefined".to_string()));

    let routes = rocket
        .routes()
        .map(|route| {
            let uri = route.uri.origin.to_string();
            let name = route
                .name
                .as_ref()
                .map(std::borrow::Cow::as_ref)
                .unwrap_or("[ERROR] Undefined");
            let method = route.method.as_str();
            format!("{method:<5} {uri:<20} {name}")
        })
        .collect::<Vec<String>>();

    let catchers = rocket
        .catchers()
        .map(|catcher| {
            let base = catcher.base.to_string();
            let name = catcher
                .name
                .as_ref()
                .map(std::borrow::Cow::as_ref)
                .unwrap_or("[ERROR] Undefined");
            let code = catcher
                .code
                .map(|code| code.to_string())
                .unwrap_or("[ERROR] Undefined".to_string());

            format!("{code:<5} {base:<20} {name}")
        })
        .collect::<Vec<String>>();

    let display_vec = |data: Vec<String>| -> String {
        let items = data
            .iter()
            .map(|d| format!("    {d}\n"))
            .collect::<String>();
        format!("[\n{items}]")
    };

    info!("\nConfig:\nUsing profile: {profile}\nAddress: {address}:{port}\nWorkers: {workers}\nLimits: {formatted_limits}\nMedia directory: {media_dir}\nViews directory: {views_dir}\nRoutes: {formatted_routes}\nCatchers: {formatted_catchers}",
        formatted_limits = display_vec(limits),
        formatted_routes = display_vec(routes),
        formatted_catchers = display_vec(catchers)
    );
}
