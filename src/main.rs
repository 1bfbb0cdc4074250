use std::sync::Arc;

use anyhow::anyhow;
use teloxide::{dispatching::dialogue::InMemStorage, prelude::*, utils::command::BotCommands};

mod application;
mod infrastructure;
mod interfaces;

use application::auth::SharedSecret;
use application::words::{CollectionStore, WordService};
use infrastructure::database::RedisStore;
use infrastructure::{AppConfig, logging};
use interfaces::bot::handlers::{
    callbacks::callback_handler,
    start::{Command, start},
    text::text_handler,
};
use interfaces::bot::{BotSettings, State};

async fn connect_store(config: &AppConfig) -> Option<Arc<dyn CollectionStore>> {
    let Some(redis_url) = config.database_url.as_deref() else {
        log::error!("DATABASE_URL is not set. Running without a database: lists stay empty and changes fail.");
        return None;
    };

    match RedisStore::connect(redis_url, &config.key_prefix).await {
        Ok(store) => {
            log::info!(
                "Connected to Redis, key prefix '{}'.",
                config.key_prefix
            );
            Some(Arc::new(store))
        }
        Err(e) => {
            log::error!(
                "Could not connect to the database. Please check your DATABASE_URL. {}",
                e
            );
            None
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init();

    let config = AppConfig::from_env();
    if config.uses_default_password() {
        log::warn!("ADMIN_PASSWORD is not set, falling back to the default admin password.");
    }
    let token = config
        .bot_token
        .clone()
        .ok_or_else(|| anyhow!("TELOXIDE_TOKEN must be set"))?;

    let store = connect_store(&config).await;
    let service = WordService::new(
        store,
        Arc::new(SharedSecret::new(config.admin_password.clone())),
    );
    let settings = BotSettings {
        toast_ttl: config.toast_ttl,
    };

    let bot = Bot::new(token);
    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        log::warn!("Failed to register bot commands: {}", e);
    }

    let command_handler = Update::filter_message()
        .filter_command::<Command>()
        .enter_dialogue::<Message, InMemStorage<State>, State>()
        .endpoint(start);

    let dialogue_handler = Update::filter_message()
        .enter_dialogue::<Message, InMemStorage<State>, State>()
        .endpoint(text_handler);

    let callback_query_handler = Update::filter_callback_query()
        .enter_dialogue::<CallbackQuery, InMemStorage<State>, State>()
        .endpoint(callback_handler);

    let handler = dptree::entry()
        .branch(command_handler)
        .branch(dialogue_handler)
        .branch(callback_query_handler);

    log::info!("Starting Skribbl word collector bot.");

    let mut dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![
            InMemStorage::<State>::new(),
            service,
            settings
        ])
        .enable_ctrlc_handler()
        .build();

    dispatcher.dispatch().await;
    Ok(())
}
