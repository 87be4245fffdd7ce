use std::sync::Arc;

use tokio::sync::watch;

use super::slides::Deck;
use super::state::PresentationState;
use crate::content::{ContentFetcher, TextGenerator};
use crate::models::budget::BudgetData;

type Snapshot = Option<Arc<BudgetData>>;

/// Top-level presentation controller: owns the deck and observes the
/// one-time budget load. Cheap to clone; every worker gets a copy.
#[derive(Clone)]
pub struct Presenter {
    deck: Arc<Deck>,
    data: watch::Receiver<Snapshot>,
}

/// Write side of the budget snapshot. Only the first publish sticks.
pub struct DataPublisher {
    tx: watch::Sender<Snapshot>,
}

impl DataPublisher {
    pub fn publish(&self, data: BudgetData) -> bool {
        let stored = self.tx.send_if_modified(|slot| {
            if slot.is_some() {
                return false;
            }
            *slot = Some(Arc::new(data));
            true
        });
        if !stored {
            log::warn!("Budget data already published; ignoring second write");
        }
        stored
    }
}

impl Presenter {
    /// A presenter in the loading state plus the handle that ends it.
    pub fn new(deck: Deck) -> (Self, DataPublisher) {
        let (tx, rx) = watch::channel(None);
        (Self { deck: Arc::new(deck), data: rx }, DataPublisher { tx })
    }

    /// Build the presenter and issue the single content fetch on the
    /// current actix runtime. Must be called from inside a runtime.
    pub fn start<G>(deck: Deck, fetcher: ContentFetcher<G>) -> Self
    where
        G: TextGenerator + 'static,
    {
        let (presenter, publisher) = Self::new(deck);
        actix_web::rt::spawn(async move {
            let data = fetcher.fetch().await;
            publisher.publish(data);
        });
        presenter
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn snapshot(&self) -> Snapshot {
        self.data.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.data.borrow().is_none()
    }

    /// Navigation state for a visitor whose cursor sits at `index`.
    pub fn state_at(&self, index: usize) -> PresentationState {
        PresentationState::restore(self.deck.len(), index, self.snapshot())
    }

    /// Resolve once data is published. `None` if the fetch task died first.
    pub async fn ready(&self) -> Snapshot {
        let mut rx = self.data.clone();
        match rx.wait_for(|d| d.is_some()).await {
            Ok(d) => d.clone(),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FetchError;
    use crate::models::budget::fallback;

    struct Unreachable;

    impl TextGenerator for Unreachable {
        async fn generate_json(&self, _prompt: &str) -> Result<String, FetchError> {
            Err(FetchError::Transport("offline".into()))
        }
    }

    #[test]
    fn loading_until_published() {
        let (presenter, publisher) = Presenter::new(Deck::budget("2026-27"));
        assert!(presenter.is_loading());
        assert!(presenter.state_at(0).is_loading());

        assert!(publisher.publish(fallback()));
        assert!(!presenter.is_loading());
        assert_eq!(presenter.snapshot().unwrap().fiscal_deficit, "4.2%");
    }

    #[test]
    fn second_publish_is_ignored() {
        let (presenter, publisher) = Presenter::new(Deck::budget("2026-27"));
        publisher.publish(fallback());
        let mut other = fallback();
        other.education = "changed".into();
        assert!(!publisher.publish(other));
        assert_eq!(presenter.snapshot().unwrap().education, fallback().education);
    }

    #[test]
    fn clones_share_the_snapshot() {
        let (presenter, publisher) = Presenter::new(Deck::budget("2026-27"));
        let copy = presenter.clone();
        publisher.publish(fallback());
        assert!(!copy.is_loading());
    }

    #[actix_web::test]
    async fn start_resolves_to_fallback_when_offline() {
        let fetcher = ContentFetcher::new(Unreachable, "prompt".into());
        let presenter = Presenter::start(Deck::budget("2026-27"), fetcher);
        let data = presenter.ready().await.expect("fetch task publishes");
        assert_eq!(*data, fallback());
        assert!(!presenter.state_at(3).is_loading());
        assert_eq!(presenter.state_at(3).current_index(), 3);
    }

    #[actix_web::test]
    async fn ready_is_none_when_publisher_dropped() {
        let (presenter, publisher) = Presenter::new(Deck::budget("2026-27"));
        drop(publisher);
        assert!(presenter.ready().await.is_none());
    }
}
