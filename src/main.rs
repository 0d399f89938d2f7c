//! SemestryBot Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;
use teloxide::{prelude::*, types::Update};
use teloxide::dispatching::UpdateHandler;
use teloxide::utils::command::BotCommands;
use tracing::{error, info, warn};

use SemestryBot::{
    config::Settings,
    utils::logging,
    services::ServiceFactory,
    i18n::I18n,
    handlers::{
        Command,
        commands::handle_command,
        callbacks::handle_callback_query,
        messages::handle_message,
    },
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard flushes the file writer on exit
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", SemestryBot::info());

    // Initialize i18n system
    info!("Loading translations...");
    let mut i18n = I18n::new(&settings.i18n)?;
    if let Some(dir) = &settings.i18n.translations_dir {
        i18n.load_translations(dir).await?;
    }

    // Initialize services
    info!("Initializing services...");
    let services = ServiceFactory::new(settings.clone())?;
    info!(directory = %services.activity_log.directory().display(), "Activity log ready");

    // Initialize bot
    let bot = Bot::new(&settings.bot.token);
    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register the command list");
    }

    let services_arc = Arc::new(services);
    let i18n_arc = Arc::new(i18n);

    let mut dispatcher = Dispatcher::builder(bot, create_handler())
        .dependencies(dptree::deps![services_arc, i18n_arc])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build();

    info!("Starting bot with polling mode...");
    dispatcher.dispatch().await;

    info!("SemestryBot has been shut down.");
    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    dptree::entry()
        .branch(
            Update::filter_message()
                .branch(
                    // Handle commands
                    dptree::entry()
                        .filter_command::<Command>()
                        .endpoint(handle_commands),
                )
                .branch(
                    // Everything else that carries text
                    dptree::filter(|msg: Message| msg.text().is_some())
                        .endpoint(handle_messages),
                ),
        )
        .branch(
            // Every query is answered; unknown data is ignored after that
            Update::filter_callback_query().endpoint(handle_callbacks),
        )
}

/// Handle bot commands
async fn handle_commands(
    bot: Bot,
    msg: Message,
    cmd: Command,
    services: Arc<ServiceFactory>,
    i18n: Arc<I18n>,
) -> HandlerResult {
    if let Err(e) = handle_command(bot, msg, cmd, services, i18n).await {
        error!(
            error = %e,
            severity = %e.severity(),
            recoverable = e.is_recoverable(),
            "Error handling command"
        );
        return Err(e.into());
    }

    Ok(())
}

/// Handle free text
async fn handle_messages(
    bot: Bot,
    msg: Message,
    services: Arc<ServiceFactory>,
    i18n: Arc<I18n>,
) -> HandlerResult {
    if let Err(e) = handle_message(bot, msg, services, i18n).await {
        error!(error = %e, "Error handling message");
        return Err(e.into());
    }

    Ok(())
}

/// Handle pagination callback queries
async fn handle_callbacks(
    bot: Bot,
    query: CallbackQuery,
    services: Arc<ServiceFactory>,
    i18n: Arc<I18n>,
) -> HandlerResult {
    let user_id = query.from.id.0 as i64;

    if let Err(e) = handle_callback_query(bot, query, services, i18n).await {
        error!(user_id = user_id, error = %e, "Error handling callback query");
        return Err(e.into());
    }

    Ok(())
}
