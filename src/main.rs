#![forbid(unsafe_code)]

mod access;
mod audit;
mod commands;
mod exchange;
mod models;
mod poise_error_handler;
mod repository;
mod utils;

use std::process::exit;

use audit::AuditLog;
use poise::{serenity_prelude::*, Framework};
use poise_error_handler::handle_error;
use repository::{RateRepository, TransactionRepository};
use serde::Deserialize;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use tokio::{select, signal};
use tracing::{error, info, info_span, warn, Instrument};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Deserialize)]
struct AppConfig {
    discord_bot_token: String,
    database_url: String,
    log_channel_id: u64,
    exchanger_role_id: u64,
    register_commands_globally: Option<bool>,
    register_commands_in_guilds: Option<Vec<u64>>,
}

pub struct BotState {
    pub rate_repository: RateRepository,
    pub transaction_repository: TransactionRepository,
    pub audit_log: AuditLog,
    pub exchanger_role: RoleId,
}

#[tracing::instrument]
#[tokio::main]
async fn main() {
    if let Err(err) = dotenvy::dotenv() {
        warn!("Could not load config from .env file: {err}");
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(
                    "exchange_desk_bot=info"
                        .parse()
                        .expect("Hard-coded default directive should be correct"),
                )
                .from_env_lossy(),
        )
        .init();

    let app_config = match envy::from_env::<AppConfig>() {
        Ok(config) => config,
        Err(err) => {
            error!("Could not load app config: {err}");
            exit(255);
        }
    };

    let db_pool = match setup_database(&app_config.database_url).await {
        Ok(pool) => pool,
        Err(err) => {
            error!("Could not setup database: {err}");
            exit(255);
        }
    };

    let rate_repository = RateRepository::new(db_pool.clone());

    if let Err(err) = rate_repository.ensure_initialized().await {
        error!("Could not initialize the rate settings: {err}");
        exit(255);
    }

    let app_state = BotState {
        rate_repository,
        transaction_repository: TransactionRepository::new(db_pool.clone()),
        audit_log: AuditLog::new(ChannelId::new(app_config.log_channel_id)),
        exchanger_role: RoleId::new(app_config.exchanger_role_id),
    };

    let framework = Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![commands::convert(), commands::rates(), commands::stats()],
            on_error: |error| Box::pin(handle_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(
                async move {
                    let commands = &framework.options().commands;

                    if let Some(true) = app_config.register_commands_globally {
                        info!("Registering commands globally");
                        poise::builtins::register_globally(ctx, commands).await?;
                    }

                    if let Some(guilds) = app_config.register_commands_in_guilds {
                        for guild in guilds.iter().map(|g| GuildId::new(*g)) {
                            let guild_name = ctx
                                .http()
                                .get_guild(guild)
                                .await
                                .map(|g| g.name)
                                .unwrap_or("???".to_string());

                            info!("Registering commands in guild {guild} ({guild_name})");

                            poise::builtins::register_in_guild(ctx, commands, guild).await?;
                        }
                    }

                    Ok(app_state)
                }
                .instrument(info_span!("bot_setup")),
            )
        })
        .build();

    let mut client = match ClientBuilder::new(app_config.discord_bot_token, GatewayIntents::empty())
        .framework(framework)
        .await
    {
        Ok(client) => client,
        Err(err) => {
            error!("Failed to create the client: {err}");
            exit(255);
        }
    };

    select! {
        _ = signal::ctrl_c() => {
            info!("Ctrl-C received, shutting down");
            client.shard_manager.shutdown_all().await;
            db_pool.close().await;
        },

        result = client.start() => {
            if let Err(err) = result {
                error!("Failed to start the client: {err}");
            }
        },
    };
}

#[tracing::instrument(skip(url))]
async fn setup_database(url: &str) -> anyhow::Result<SqlitePool> {
    info!("Connecting to SQLite database at {url}");
    let pool = SqlitePoolOptions::new().connect(url).await?;
    info!("Running migrations");
    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("Done!");
    Ok(pool)
}
