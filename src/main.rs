use rusty_library_management::{
    adapters::postgres::{
        PostgresBookRepository, PostgresBorrowRepository, PostgresFineRepository,
        PostgresInventoryRepository, PostgresMemberRepository, PostgresNotificationRepository,
    },
    api::{handlers::AppState, router::create_router},
    application::{
        BookService, BorrowService, FineService, InventoryService, MemberService,
        NotificationService,
    },
    ports::{
        BookRepository, BorrowRepository, FineRepository, InventoryRepository, MemberRepository,
        NotificationRepository,
    },
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "rusty_library_management=debug,tower_http=debug,axum=trace".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection URL
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "postgres://localhost/library".into());

    tracing::info!("Database URL: {}", database_url);

    // Initialize database connection pool
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    // Apply migrations on startup
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    // Initialize adapters
    let book_repository: Arc<dyn BookRepository> =
        Arc::new(PostgresBookRepository::new(pool.clone()));
    let member_repository: Arc<dyn MemberRepository> =
        Arc::new(PostgresMemberRepository::new(pool.clone()));
    let inventory_repository: Arc<dyn InventoryRepository> =
        Arc::new(PostgresInventoryRepository::new(pool.clone()));
    let borrow_repository: Arc<dyn BorrowRepository> =
        Arc::new(PostgresBorrowRepository::new(pool.clone()));
    let fine_repository: Arc<dyn FineRepository> =
        Arc::new(PostgresFineRepository::new(pool.clone()));
    let notification_repository: Arc<dyn NotificationRepository> =
        Arc::new(PostgresNotificationRepository::new(pool.clone()));

    // Wire services explicitly - every collaborator is a constructor argument
    let inventory_service = Arc::new(InventoryService::new(
        inventory_repository,
        book_repository.clone(),
    ));
    let fine_service = Arc::new(FineService::new(fine_repository));
    let notification_service = Arc::new(NotificationService::new(notification_repository));
    let borrow_service = Arc::new(BorrowService::new(
        borrow_repository,
        book_repository.clone(),
        member_repository.clone(),
        inventory_service.clone(),
        fine_service.clone(),
        notification_service.clone(),
    ));
    let book_service = Arc::new(BookService::new(book_repository));
    let member_service = Arc::new(MemberService::new(member_repository));

    // Create application state
    let app_state = Arc::new(AppState {
        book_service,
        member_service,
        inventory_service,
        borrow_service,
        fine_service,
        notification_service,
    });

    // Create router
    let app = create_router(app_state);

    // Server configuration
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".into());
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
