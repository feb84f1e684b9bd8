//! Vanilla swing option.
//!
//! A swing option grants between `min_exercise_rights` and
//! `max_exercise_rights` exercises over the instants of a [`SwingExercise`];
//! each exercise pays the option's strike-typed payoff.
//!
//! The option itself is an immutable description.  Pricing goes through a
//! fresh [`SwingOptionArguments`] per request, which shares the payoff and the
//! schedule with the option by reference count.

use crate::exercise::SwingExercise;
use crate::instrument::{Instrument, PricingEngine, PricingEngineArguments, PricingResults};
use crate::payoff::{OptionType, StrikedPayoff};
use ql_core::errors::{Error, Result};
use ql_core::{ensure, Real, Size};
use ql_time::{evaluation_date, Date};
use std::any::Any;
use std::sync::Arc;
use tracing::{debug, warn};

// ────────────────────────────────────────────────────────────────────────────
// Swing option arguments (sent to pricing engines)
// ────────────────────────────────────────────────────────────────────────────

/// Arguments needed for pricing a swing option.
///
/// Corresponds to `QuantLib::VanillaSwingOption::arguments`.
#[derive(Debug, Clone, Default)]
pub struct SwingOptionArguments {
    /// The payoff paid per exercised right.
    pub payoff: Option<Arc<dyn StrikedPayoff>>,
    /// The exercise schedule.
    pub exercise: Option<Arc<SwingExercise>>,
    /// Minimum number of rights the holder must exercise.
    pub min_exercise_rights: Size,
    /// Maximum number of rights the holder may exercise.
    pub max_exercise_rights: Size,
}

impl PricingEngineArguments for SwingOptionArguments {
    fn validate(&self) -> Result<()> {
        let result = self.check();
        if let Err(e) = &result {
            warn!(error = %e, "swing option arguments rejected");
        }
        result
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl SwingOptionArguments {
    fn check(&self) -> Result<()> {
        self.payoff.as_ref().ok_or(Error::MissingPayoff)?;
        let exercise = self.exercise.as_ref().ok_or(Error::MissingExercise)?;
        ensure!(
            self.min_exercise_rights <= self.max_exercise_rights,
            InvalidRights,
            "minExerciseRights ({}) exceeds maxExerciseRights ({})",
            self.min_exercise_rights,
            self.max_exercise_rights
        );
        ensure!(
            self.max_exercise_rights <= exercise.len(),
            InvalidRights,
            "number of exercise rights ({}) exceeds number of exercise instants ({})",
            self.max_exercise_rights,
            exercise.len()
        );
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// VanillaSwingOption
// ────────────────────────────────────────────────────────────────────────────

/// A swing option on a single underlying.
///
/// Corresponds to `QuantLib::VanillaSwingOption`.
#[derive(Debug, Clone)]
pub struct VanillaSwingOption {
    payoff: Arc<dyn StrikedPayoff>,
    exercise: Arc<SwingExercise>,
    min_exercise_rights: Size,
    max_exercise_rights: Size,
}

impl VanillaSwingOption {
    /// Create a new swing option.
    ///
    /// The rights bounds are checked when the option is priced, by
    /// [`SwingOptionArguments::validate`].
    pub fn new(
        payoff: Arc<dyn StrikedPayoff>,
        exercise: Arc<SwingExercise>,
        min_exercise_rights: Size,
        max_exercise_rights: Size,
    ) -> Self {
        Self {
            payoff,
            exercise,
            min_exercise_rights,
            max_exercise_rights,
        }
    }

    /// The payoff.
    pub fn payoff(&self) -> &dyn StrikedPayoff {
        &*self.payoff
    }

    /// The exercise schedule.
    pub fn exercise(&self) -> &SwingExercise {
        &self.exercise
    }

    /// The strike price.
    pub fn strike(&self) -> Real {
        self.payoff.strike()
    }

    /// The option type (call/put).
    pub fn option_type(&self) -> OptionType {
        self.payoff.option_type()
    }

    /// Minimum number of exercise rights.
    pub fn min_exercise_rights(&self) -> Size {
        self.min_exercise_rights
    }

    /// Maximum number of exercise rights.
    pub fn max_exercise_rights(&self) -> Size {
        self.max_exercise_rights
    }

    /// Whether the option has expired when evaluated on `date`, i.e. `date`
    /// is strictly after the last exercise date.
    pub fn is_expired_at(&self, date: Date) -> bool {
        date > self.exercise.last_date()
    }

    /// Price this option using the given engine.
    ///
    /// Builds fresh arguments, validates them and only then calls the engine;
    /// validation errors are returned as they are.
    pub fn price(
        &self,
        engine: &dyn PricingEngine<SwingOptionArguments>,
    ) -> Result<PricingResults> {
        let mut args = SwingOptionArguments::default();
        self.setup_arguments(&mut args)?;
        args.validate()?;
        engine.calculate(&args)
    }
}

impl Instrument for VanillaSwingOption {
    /// An evaluation date that cannot be resolved counts as not expired.
    fn is_expired(&self) -> bool {
        match evaluation_date() {
            Ok(today) => self.is_expired_at(today),
            Err(e) => {
                warn!(error = %e, "evaluation date unavailable; treating swing option as alive");
                false
            }
        }
    }

    fn maturity_date(&self) -> Option<Date> {
        Some(self.exercise.last_date())
    }

    fn setup_arguments(&self, args: &mut dyn PricingEngineArguments) -> Result<()> {
        let Some(arguments) = args.as_any_mut().downcast_mut::<SwingOptionArguments>() else {
            return Err(Error::TypeMismatch(
                "swing option requires SwingOptionArguments".into(),
            ));
        };
        arguments.payoff = Some(Arc::clone(&self.payoff));
        arguments.exercise = Some(Arc::clone(&self.exercise));
        arguments.min_exercise_rights = self.min_exercise_rights;
        arguments.max_exercise_rights = self.max_exercise_rights;
        debug!(
            exercise = %self.exercise,
            min = self.min_exercise_rights,
            max = self.max_exercise_rights,
            "swing option arguments set up"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payoff::{PlainVanillaPayoff, VanillaForwardPayoff};
    use ql_core::ScopedEvaluationDate;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn daily_exercise() -> Arc<SwingExercise> {
        Arc::new(SwingExercise::from_range(date(2024, 1, 1), date(2024, 1, 10), 86_400).unwrap())
    }

    fn swing(min: Size, max: Size) -> VanillaSwingOption {
        VanillaSwingOption::new(
            Arc::new(VanillaForwardPayoff::new(OptionType::Call, 30.0)),
            daily_exercise(),
            min,
            max,
        )
    }

    /// Pays the payoff at strike + 1 per maximal right, counting calls.
    #[derive(Debug, Default)]
    struct CountingEngine {
        calls: AtomicUsize,
    }

    impl PricingEngine<SwingOptionArguments> for CountingEngine {
        fn calculate(&self, args: &SwingOptionArguments) -> Result<PricingResults> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let payoff = args.payoff.as_ref().ok_or(Error::MissingPayoff)?;
            let value = payoff.value(payoff.strike() + 1.0);
            Ok(PricingResults::from_npv(value * args.max_exercise_rights as Real))
        }
    }

    #[derive(Debug, Default)]
    struct OtherArguments;

    impl PricingEngineArguments for OtherArguments {
        fn validate(&self) -> Result<()> {
            Ok(())
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[test]
    fn construction() {
        let opt = swing(2, 5);
        assert_eq!(opt.strike(), 30.0);
        assert_eq!(opt.option_type(), OptionType::Call);
        assert_eq!(opt.min_exercise_rights(), 2);
        assert_eq!(opt.max_exercise_rights(), 5);
        assert_eq!(opt.exercise().len(), 10);
        assert_eq!(opt.maturity_date(), Some(date(2024, 1, 10)));
    }

    #[test]
    fn expiry_is_strictly_after_last_date() {
        let opt = swing(0, 10);
        assert!(!opt.is_expired_at(date(2024, 1, 1)));
        assert!(!opt.is_expired_at(date(2024, 1, 10)));
        assert!(opt.is_expired_at(date(2024, 1, 11)));
    }

    #[test]
    fn is_expired_reads_evaluation_date() {
        let opt = swing(0, 10);
        {
            let _today = ScopedEvaluationDate::new(date(2024, 1, 10).serial());
            assert!(!opt.is_expired());
        }
        {
            let _today = ScopedEvaluationDate::new(date(2024, 1, 11).serial());
            assert!(opt.is_expired());
        }
        {
            // Serial 0 is outside the supported date range.
            let _today = ScopedEvaluationDate::new(0);
            assert!(evaluation_date().is_err());
            assert!(!opt.is_expired());
        }
    }

    #[test]
    fn setup_arguments_shares_state() {
        let opt = swing(1, 4);
        let mut args = SwingOptionArguments::default();
        opt.setup_arguments(&mut args).unwrap();
        assert_eq!(args.min_exercise_rights, 1);
        assert_eq!(args.max_exercise_rights, 4);
        assert!(Arc::ptr_eq(
            args.exercise.as_ref().unwrap(),
            &opt.exercise
        ));
        assert_eq!(args.payoff.as_ref().unwrap().strike(), 30.0);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn setup_arguments_rejects_foreign_type() {
        let opt = swing(1, 4);
        let mut other = OtherArguments;
        assert!(matches!(
            opt.setup_arguments(&mut other),
            Err(Error::TypeMismatch(_))
        ));
    }

    #[test]
    fn validate_reports_missing_pieces() {
        let mut args = SwingOptionArguments::default();
        assert_eq!(args.validate(), Err(Error::MissingPayoff));

        args.payoff = Some(Arc::new(PlainVanillaPayoff::new(OptionType::Put, 30.0)));
        assert_eq!(args.validate(), Err(Error::MissingExercise));

        args.exercise = Some(daily_exercise());
        assert!(args.validate().is_ok());
    }

    #[test]
    fn validate_checks_rights_bounds() {
        let mut args = SwingOptionArguments::default();
        swing(3, 2).setup_arguments(&mut args).unwrap();
        assert!(matches!(args.validate(), Err(Error::InvalidRights(_))));

        swing(0, 11).setup_arguments(&mut args).unwrap();
        assert!(matches!(args.validate(), Err(Error::InvalidRights(_))));

        swing(10, 10).setup_arguments(&mut args).unwrap();
        assert!(args.validate().is_ok());
    }

    #[test]
    fn price_validates_before_calling_engine() {
        let engine = CountingEngine::default();

        let npv = swing(2, 5).price(&engine).unwrap().npv;
        assert!((npv - 5.0).abs() < 1e-15);
        assert_eq!(engine.calls.load(Ordering::SeqCst), 1);

        assert!(matches!(
            swing(3, 2).price(&engine),
            Err(Error::InvalidRights(_))
        ));
        assert_eq!(engine.calls.load(Ordering::SeqCst), 1);
    }
}
