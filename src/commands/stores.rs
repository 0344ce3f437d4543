//! Stores command - Inspect the JSON document stores.

use crate::cli::args::{StoresAction, StoresArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{TrainingRepository, TrainingStore, UserRepository, UserStore};

/// Execute the stores command
pub async fn execute(args: StoresArgs, config: Config) -> AppResult<()> {
    match args.action {
        StoresAction::Status => {
            tracing::info!("Checking store status...");
            let users = UserStore::open(config.users_file());
            let trainings = TrainingStore::open(config.trainings_file());

            let total = trainings.count();
            let active = trainings.list_active().len();

            println!("{}: {} users", config.users_file().display(), users.count());
            println!(
                "{}: {} trainings ({} active, {} in recycle bin)",
                config.trainings_file().display(),
                total,
                active,
                total - active
            );
        }
    }

    Ok(())
}
