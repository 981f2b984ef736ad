use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_api_backend::config::AppConfig;
use user_api_backend::core::AppContainer;
use user_api_backend::db::migrations::{run_startup_migrations, MongoMigrator};
use user_api_backend::db::Database;
use user_api_backend::repositories::users::MongoUserRepository;
use user_api_backend::repositories::UserRepository;
use user_api_backend::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 사용자 API 서비스 시작중...");

    let config = AppConfig::from_env().map_err(|e| {
        error!("설정 로드 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    info!("실행 환경: {:?}", config.environment);
    info!("📡 데이터베이스 연결 중...");

    let database = Database::connect(&config.database).await.map_err(|e| {
        error!("데이터베이스 연결 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    let migrator = MongoMigrator::new(&database);
    run_startup_migrations(config.migration_flag.as_deref(), &migrator)
        .await
        .map_err(|e| {
            error!("마이그레이션 실패로 기동을 중단합니다: {}", e);
            io::Error::other(e.to_string())
        })?;

    let repository: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(&database));
    let container = AppContainer::new(repository, config.signing.clone(), config.token.clone());

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(config, container).await
}

async fn start_http_server(config: AppConfig, container: AppContainer) -> io::Result<()> {
    let bind_address = config.server.bind_address.clone();
    let environment = config.environment;

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    if environment.is_development() {
        info!("📍 API Docs: http://{}/swagger/v1/swagger.json", bind_address);
    }

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(config.rate_limit.per_second)
        .burst_size(config.rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        config.rate_limit.per_second,
        config.rate_limit.burst_size
    );

    HttpServer::new(move || {
        let container = container.clone();

        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(move |cfg| configure_all_routes(cfg, &container, environment))
    })
        .bind(&bind_address)?
        .workers(config.server.workers)
        .run()
        .await
}

fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                eprintln!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .expose_headers(vec![header::LOCATION, header::WWW_AUTHENTICATE])
        .supports_credentials()
        .max_age(3600)
}
