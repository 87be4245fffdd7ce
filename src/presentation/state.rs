use std::sync::Arc;

use crate::errors::AppError;
use crate::models::budget::BudgetData;

/// Cursor over a fixed deck plus the loaded budget snapshot.
///
/// Navigation is cyclic: `next` on the last slide wraps to the first and
/// `previous` on the first wraps to the last. Only the navigation methods
/// move the cursor; `publish` writes the data once.
#[derive(Debug, Clone)]
pub struct PresentationState {
    current_index: usize,
    slide_count: usize,
    data: Option<Arc<BudgetData>>,
    loading: bool,
}

impl PresentationState {
    pub fn new(slide_count: usize) -> Self {
        Self { current_index: 0, slide_count, data: None, loading: true }
    }

    /// Rebuild a state from a remembered cursor and the current snapshot.
    /// A stale cursor outside the deck is reset to the first slide.
    pub fn restore(slide_count: usize, index: usize, data: Option<Arc<BudgetData>>) -> Self {
        let mut state = Self::new(slide_count);
        if index < slide_count {
            state.current_index = index;
        }
        if let Some(data) = data {
            state.publish(data);
        }
        state
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn data(&self) -> Option<&BudgetData> {
        self.data.as_deref()
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.slide_count > 0 && self.current_index == self.slide_count - 1
    }

    pub fn next(&mut self) {
        if self.slide_count > 0 {
            self.current_index = (self.current_index + 1) % self.slide_count;
        }
    }

    pub fn previous(&mut self) {
        if self.slide_count > 0 {
            self.current_index = (self.current_index + self.slide_count - 1) % self.slide_count;
        }
    }

    pub fn go_to(&mut self, index: usize) -> Result<(), AppError> {
        if index >= self.slide_count {
            return Err(AppError::SlideOutOfRange(index));
        }
        self.current_index = index;
        Ok(())
    }

    /// Store the loaded data and leave the loading state. Only the first
    /// call has any effect; returns whether this call stored the data.
    pub fn publish(&mut self, data: Arc<BudgetData>) -> bool {
        if self.data.is_some() {
            log::warn!("Budget data already published; ignoring second write");
            return false;
        }
        self.data = Some(data);
        self.loading = false;
        true
    }

    /// Percentage of the deck reached, counting the current slide.
    pub fn progress_percent(&self) -> f64 {
        if self.slide_count == 0 {
            return 0.0;
        }
        (self.current_index + 1) as f64 / self.slide_count as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::budget::fallback;

    const COUNT: usize = 12;

    #[test]
    fn starts_loading_on_first_slide() {
        let state = PresentationState::new(COUNT);
        assert_eq!(state.current_index(), 0);
        assert!(state.is_loading());
        assert!(state.data().is_none());
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let mut state = PresentationState::new(COUNT);
        state.go_to(COUNT - 1).unwrap();
        assert!(state.is_last());
        state.next();
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        let mut state = PresentationState::new(COUNT);
        state.previous();
        assert_eq!(state.current_index(), COUNT - 1);
    }

    #[test]
    fn next_is_cyclic_from_every_start() {
        for start in 0..COUNT {
            let mut state = PresentationState::new(COUNT);
            state.go_to(start).unwrap();
            for _ in 0..COUNT {
                state.next();
            }
            assert_eq!(state.current_index(), start);
        }
    }

    #[test]
    fn previous_undoes_next() {
        for i in 0..COUNT {
            let mut state = PresentationState::new(COUNT);
            state.go_to(i).unwrap();
            state.next();
            state.previous();
            assert_eq!(state.current_index(), i);
        }
    }

    #[test]
    fn go_to_sets_cursor() {
        let mut state = PresentationState::new(COUNT);
        for k in 0..COUNT {
            state.go_to(k).unwrap();
            assert_eq!(state.current_index(), k);
        }
    }

    #[test]
    fn go_to_rejects_out_of_range() {
        let mut state = PresentationState::new(COUNT);
        state.go_to(3).unwrap();
        assert!(matches!(state.go_to(COUNT), Err(AppError::SlideOutOfRange(12))));
        assert_eq!(state.current_index(), 3);
    }

    #[test]
    fn publish_is_write_once() {
        let mut state = PresentationState::new(COUNT);
        assert!(state.publish(Arc::new(fallback())));
        assert!(!state.is_loading());

        let mut other = fallback();
        other.fiscal_deficit = "9.9%".into();
        assert!(!state.publish(Arc::new(other)));
        assert_eq!(state.data().unwrap().fiscal_deficit, "4.2%");
    }

    #[test]
    fn restore_resets_stale_cursor() {
        let state = PresentationState::restore(COUNT, 40, None);
        assert_eq!(state.current_index(), 0);
        assert!(state.is_loading());

        let state = PresentationState::restore(COUNT, 5, Some(Arc::new(fallback())));
        assert_eq!(state.current_index(), 5);
        assert!(!state.is_loading());
    }

    #[test]
    fn empty_deck_never_moves() {
        let mut state = PresentationState::new(0);
        state.next();
        state.previous();
        assert_eq!(state.current_index(), 0);
        assert!(state.go_to(0).is_err());
        assert!(!state.is_last());
    }

    #[test]
    fn progress_counts_current_slide() {
        let mut state = PresentationState::new(4);
        assert_eq!(state.progress_percent(), 25.0);
        state.go_to(3).unwrap();
        assert_eq!(state.progress_percent(), 100.0);
    }
}
