use crate::{
    error::{ReservationError, Result},
    reservation::{AdmissionRequest, ReservationRequest},
};
use chrono::{Days, Local, NaiveDateTime};

/// Source of "now" for the not-in-the-past rule.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> NaiveDateTime;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

pub struct ReservationValidator {
    clock: Box<dyn Clock>,
}

impl Default for ReservationValidator {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl ReservationValidator {
    pub fn new(clock: impl Clock) -> Self {
        Self {
            clock: Box::new(clock),
        }
    }

    /// Fails on the first rule broken. The result depends on the clock, so
    /// the same request can pass now and fail later.
    pub fn validate<'a>(
        &self,
        request: impl Into<Option<&'a ReservationRequest>>,
    ) -> Result<AdmissionRequest> {
        let request = request
            .into()
            .ok_or_else(|| ReservationError::validation("request is required"))?;
        let category = request
            .category
            .ok_or_else(|| ReservationError::validation("category is required"))?;
        let start = request
            .start
            .ok_or_else(|| ReservationError::validation("start time is required"))?;

        if start < self.clock.now() {
            return Err(ReservationError::validation(
                "start time cannot be in the past",
            ));
        }
        if request.duration_days <= 0 {
            return Err(ReservationError::validation(
                "duration must be greater than zero days",
            ));
        }

        let end = u64::try_from(request.duration_days)
            .ok()
            .and_then(|days| start.checked_add_days(Days::new(days)))
            .ok_or_else(|| ReservationError::validation("duration overflows the calendar"))?;

        Ok(AdmissionRequest::new(category, start, end))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::reservation::ReservationCategory;
    use chrono::NaiveDate;

    fn noon(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn validator() -> ReservationValidator {
        ReservationValidator::new(FixedClock(noon(2030, 1, 1)))
    }

    fn reason(err: ReservationError) -> String {
        match err {
            ReservationError::Validation(reason) => reason,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_request_derives_end() {
        let req = ReservationRequest::new(ReservationCategory::Suv, noon(2030, 2, 27), 3);
        let admitted = validator().validate(&req).unwrap();
        assert_eq!(admitted.category(), ReservationCategory::Suv);
        assert_eq!(admitted.start(), noon(2030, 2, 27));
        // calendar days, across the month boundary
        assert_eq!(admitted.end(), noon(2030, 3, 2));
    }

    #[test]
    fn test_start_equal_to_now_is_accepted() {
        let req = ReservationRequest::new(ReservationCategory::Van, noon(2030, 1, 1), 1);
        assert!(validator().validate(&req).is_ok());
    }

    #[test]
    fn test_rule_order() {
        let v = validator();
        assert_eq!(reason(v.validate(None::<&ReservationRequest>).unwrap_err()), "request is required");

        // every field missing or wrong: category is reported first
        let req = ReservationRequest {
            category: None,
            start: None,
            duration_days: -1,
        };
        assert_eq!(reason(v.validate(&req).unwrap_err()), "category is required");

        let req = ReservationRequest {
            category: Some(ReservationCategory::Sedan),
            start: None,
            duration_days: -1,
        };
        assert_eq!(reason(v.validate(&req).unwrap_err()), "start time is required");

        let req = ReservationRequest::new(ReservationCategory::Sedan, noon(2029, 12, 31), -1);
        assert_eq!(
            reason(v.validate(&req).unwrap_err()),
            "start time cannot be in the past"
        );

        let req = ReservationRequest::new(ReservationCategory::Sedan, noon(2030, 6, 1), 0);
        assert_eq!(
            reason(v.validate(&req).unwrap_err()),
            "duration must be greater than zero days"
        );
    }

    #[test]
    fn test_verdict_moves_with_clock() {
        let req = ReservationRequest::new(ReservationCategory::Sedan, noon(2030, 1, 5), 1);
        assert!(ReservationValidator::new(FixedClock(noon(2030, 1, 1)))
            .validate(&req)
            .is_ok());
        assert!(ReservationValidator::new(FixedClock(noon(2030, 1, 6)))
            .validate(&req)
            .is_err());
    }

    #[test]
    fn test_overflowing_duration() {
        let req = ReservationRequest::new(ReservationCategory::Sedan, noon(2030, 1, 1), i64::MAX);
        assert_eq!(
            reason(validator().validate(&req).unwrap_err()),
            "duration overflows the calendar"
        );
    }
}
