use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, Level};
use user_service::{
    app::{build_router, users::UserStore, AppState},
    infrastructure::{Config, Logger, MemoryUserStore, MongoUserStore, StoreBackend},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志
    Logger::init(Level::INFO);

    let config = Config::from_env().context("加载配置失败")?;
    info!("启动用户服务... ({:?})", config.backend);

    let store: Arc<dyn UserStore> = match config.backend {
        StoreBackend::MongoDb => Arc::new(
            MongoUserStore::connect(&config)
                .await
                .context("无法连接 MongoDB")?,
        ),
        StoreBackend::Memory => Arc::new(MemoryUserStore::new()),
    };

    let app = build_router(AppState::new(store), config.request_timeout);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("无法绑定到 {}", config.bind_addr))?;

    info!("🚀 用户服务运行在 http://{}", config.bind_addr);
    info!("   POST   /users         - 创建用户");
    info!("   GET    /users         - 分页获取用户 (page, limit)");
    info!("   GET    /users/:id     - 获取用户");
    info!("   PUT    /users/:id     - 部分更新用户");
    info!("   DELETE /users/:id     - 删除用户");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("服务器运行失败")?;

    info!("服务已停止");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("无法监听退出信号: {}", e);
    }
}
