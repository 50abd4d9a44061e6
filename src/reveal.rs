//! One-shot scroll reveal.
//!
//! A [`RevealController`] watches a single element through a
//! [`ViewportNotifier`] and flips to visible the first time enough of the
//! element is on screen. After that it stops watching and never goes back.

use log::debug;

/// Slack allowed when comparing a reported ratio against the threshold.
/// Browsers report the crossing ratio with float noise (0.1499.. for 0.15).
const RATIO_TOLERANCE: f64 = 1e-3;

/// Something that can tell us when targets enter the viewport.
///
/// In the browser this is an `IntersectionObserver`; observations are fed
/// back to the controller through [`RevealController::on_sample`].
#[cfg_attr(test, mockall::automock(type Target = u32;))]
pub trait ViewportNotifier {
    type Target;

    fn observe(&mut self, target: &Self::Target);
    fn unobserve(&mut self, target: &Self::Target);
    fn disconnect(&mut self);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    pub observed: bool,
    pub visible: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl IntersectionSample {
    pub fn crosses(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio + RATIO_TOLERANCE >= threshold
    }
}

pub struct RevealController<N: ViewportNotifier> {
    notifier: N,
    target: Option<N::Target>,
    threshold: f64,
    state: RevealState,
    torn_down: bool,
}

impl<N: ViewportNotifier> RevealController<N> {
    /// Registers `target` with the notifier. A missing target leaves the
    /// controller inert: nothing is observed and it never becomes visible.
    pub fn mount(mut notifier: N, target: Option<N::Target>, threshold: f64) -> Self {
        let mut state = RevealState::default();
        match &target {
            Some(target) => {
                notifier.observe(target);
                state.observed = true;
            }
            None => debug!("reveal target missing at mount, staying hidden"),
        }
        Self {
            notifier,
            target,
            threshold,
            state,
            torn_down: false,
        }
    }

    /// Feeds one observation. Returns true only on the call that reveals.
    pub fn on_sample(&mut self, sample: IntersectionSample) -> bool {
        if !self.state.observed || self.state.visible {
            return false;
        }
        if !sample.crosses(self.threshold) {
            return false;
        }

        self.state.visible = true;
        self.state.observed = false;
        if let Some(target) = &self.target {
            self.notifier.unobserve(target);
        }
        true
    }

    /// Releases the notifier. Safe to call whether or not the target ever
    /// intersected, and safe to call twice.
    pub fn teardown(&mut self) {
        if self.torn_down || self.target.is_none() {
            return;
        }
        self.torn_down = true;
        self.state.observed = false;
        self.notifier.disconnect();
    }

    pub fn state(&self) -> RevealState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    const THRESHOLD: f64 = 0.15;

    fn hit(ratio: f64) -> IntersectionSample {
        IntersectionSample { ratio, is_intersecting: true }
    }

    fn miss() -> IntersectionSample {
        IntersectionSample { ratio: 0.0, is_intersecting: false }
    }

    fn observing_notifier() -> MockViewportNotifier {
        let mut notifier = MockViewportNotifier::new();
        notifier.expect_observe().with(eq(7)).times(1).return_const(());
        notifier
    }

    #[test]
    fn starts_hidden_and_observed() {
        let controller = RevealController::mount(observing_notifier(), Some(7), THRESHOLD);
        assert_eq!(
            controller.state(),
            RevealState { observed: true, visible: false }
        );
    }

    #[test]
    fn reveals_once_and_never_reverts() {
        let mut notifier = observing_notifier();
        notifier.expect_unobserve().with(eq(7)).times(1).return_const(());
        let mut controller = RevealController::mount(notifier, Some(7), THRESHOLD);

        assert!(controller.on_sample(hit(0.4)));
        assert!(controller.state().visible);

        assert!(!controller.on_sample(miss()));
        assert!(!controller.on_sample(hit(1.0)));
        assert!(controller.state().visible);
        assert!(!controller.state().observed);
    }

    #[test]
    fn ignores_samples_below_threshold() {
        let notifier = observing_notifier();
        let mut controller = RevealController::mount(notifier, Some(7), THRESHOLD);

        assert!(!controller.on_sample(hit(0.05)));
        assert!(!controller.on_sample(IntersectionSample { ratio: 0.5, is_intersecting: false }));
        assert!(!controller.state().visible);
        assert!(controller.state().observed);
    }

    #[test]
    fn tolerates_float_noise_at_the_crossing() {
        let mut notifier = observing_notifier();
        notifier.expect_unobserve().times(1).return_const(());
        let mut controller = RevealController::mount(notifier, Some(7), THRESHOLD);

        assert!(controller.on_sample(hit(0.1499)));
    }

    #[test]
    fn teardown_before_intersection_disconnects() {
        let mut notifier = observing_notifier();
        notifier.expect_unobserve().never();
        notifier.expect_disconnect().times(1).return_const(());
        let mut controller = RevealController::mount(notifier, Some(7), THRESHOLD);

        controller.teardown();
        controller.teardown();
        assert!(!controller.state().visible);
        assert!(!controller.on_sample(hit(1.0)));
    }

    #[test]
    fn teardown_after_reveal_keeps_visibility() {
        let mut notifier = observing_notifier();
        notifier.expect_unobserve().times(1).return_const(());
        notifier.expect_disconnect().times(1).return_const(());
        let mut controller = RevealController::mount(notifier, Some(7), THRESHOLD);

        controller.on_sample(hit(0.9));
        controller.teardown();
        assert!(controller.state().visible);
    }

    #[test]
    fn missing_target_registers_nothing() {
        let mut notifier = MockViewportNotifier::new();
        notifier.expect_observe().never();
        notifier.expect_unobserve().never();
        notifier.expect_disconnect().never();
        let mut controller = RevealController::mount(notifier, None, THRESHOLD);

        assert_eq!(controller.state(), RevealState::default());
        assert!(!controller.on_sample(hit(1.0)));
        controller.teardown();
        assert!(!controller.state().visible);
    }
}
