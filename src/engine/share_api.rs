use super::Engine;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::{
    api::ShareAPI,
    engine::helpers::validate_participants,
    entities::{Share, ShareData, ShareLink},
    error::{expired_error, not_found_error, validation_error, Error},
};

#[async_trait]
impl ShareAPI for Engine {
    #[tracing::instrument(skip(self, data))]
    async fn create_share(&self, data: ShareData) -> Result<ShareLink, Error> {
        validate_participants(&data.participants)?;

        if !data.anchor.is_valid() || !data.final_place.coordinates().is_valid() {
            return Err(validation_error(
                "coordinate out of range",
                "anchor or final place",
            ));
        }

        let share = Share::new(data, Utc::now());
        self.shares.insert_share(&share).await?;

        self.spawn_expired_share_cleanup();

        let url = format!(
            "{}/share/{}",
            self.share_base_url.trim_end_matches('/'),
            share.id
        );

        Ok(ShareLink {
            share_id: share.id,
            url,
        })
    }

    #[tracing::instrument(skip(self))]
    async fn find_share(&self, id: Uuid) -> Result<Share, Error> {
        let share = self
            .shares
            .find_share(id)
            .await?
            .ok_or_else(|| not_found_error("share"))?;

        if share.is_expired(Utc::now()) {
            self.shares.delete_share(id).await?;
            return Err(expired_error("share"));
        }

        Ok(share)
    }
}

impl Engine {
    /// Removes expired shares in the background. Failures are logged and never
    /// reach the request that triggered the cleanup.
    fn spawn_expired_share_cleanup(&self) {
        let shares = self.shares.clone();

        tokio::spawn(async move {
            match shares.delete_expired_shares(Utc::now()).await {
                Ok(0) => {}
                Ok(cleaned) => tracing::info!("cleaned {} expired shares", cleaned),
                Err(err) => tracing::error!("failed to clean expired shares: {}", err),
            }
        });
    }
}
