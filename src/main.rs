use actix_web::{web, App, HttpServer, middleware};
use actix_cors::Cors;
use anyhow::Context;
use dotenv::dotenv;
use std::sync::Arc;
use log::info;

use showcase_api::handlers::showcase::{configure, AppState};
use showcase_api::utils::projects::{featured_projects, PROJECTS};
use showcase_api::{CacheStore, Config, FileCache, GitHubClient, ShowcaseResolver};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env().context("Failed to load configuration")?;

    let github_client = GitHubClient::with_base_url(
        &config.github_api_url,
        config.github_token.clone(),
        config.upstream_timeout,
    )
    .context("Failed to create GitHub client")?;

    let cache: Option<Arc<dyn CacheStore>> = match &config.cache_file {
        Some(path) => {
            info!("Caching GitHub data in {} (ttl {:?})", path.display(), config.cache_ttl);
            Some(Arc::new(FileCache::new(path.clone(), config.cache_ttl)))
        }
        None => {
            info!("GitHub cache disabled");
            None
        }
    };

    let resolver = ShowcaseResolver::new(github_client, cache, PROJECTS.clone(), &config);
    info!(
        "Showcasing {} projects ({} featured) for {}",
        PROJECTS.len(),
        featured_projects().count(),
        resolver.username()
    );

    let app_state = web::Data::new(AppState {
        resolver: Arc::new(resolver),
    });

    let bind_addr = config.bind_addr();
    info!("Starting server on {}", bind_addr);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(app_state.clone())
            .configure(configure)
    })
    .bind(&bind_addr)
    .with_context(|| format!("Failed to bind {}", bind_addr))?
    .run()
    .await?;

    Ok(())
}
