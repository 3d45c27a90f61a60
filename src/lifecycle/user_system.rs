use crate::clients::UserClient;
use crate::config::UserConfig;
use crate::user_actor::{self, BirthDatePolicy};
use tracing::{error, info};

/// Runtime orchestrator for the User store.
///
/// `UserSystem` owns the store actor's task and hands out its client. Shutdown is cooperative:
/// once every client clone is gone the actor's channel closes and its loop ends.
///
/// # Example
///
/// ```ignore
/// let system = UserSystem::start(BirthDatePolicy::new(18), 32);
/// let users = system.user_client.clone();
/// users.save(user).await?;
/// drop(users);
/// system.shutdown().await?;
/// ```
pub struct UserSystem {
    /// Client for interacting with the User actor
    pub user_client: UserClient,

    handle: tokio::task::JoinHandle<()>,
}

impl UserSystem {
    /// Spawns the User actor with `policy` as its validation context.
    pub fn start(policy: BirthDatePolicy, buffer_size: usize) -> Self {
        info!(min_age = policy.min_age(), buffer_size, "Starting user store");
        let (actor, user_client) = user_actor::new(buffer_size);
        let handle = tokio::spawn(actor.run(policy));

        Self {
            user_client,
            handle,
        }
    }

    /// Spawns the User actor from configuration, using the local calendar.
    pub fn from_config(config: &UserConfig) -> Self {
        Self::start(
            BirthDatePolicy::new(config.min_age),
            config.channel_buffer,
        )
    }

    /// Drops the system's client and waits for the actor task to finish.
    ///
    /// Clones of the client still held elsewhere keep the actor alive, so drop them first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.user_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
