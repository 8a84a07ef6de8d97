#[cfg(test)]
mod tests {
    use crate::implementations::classification::*;
    use crate::models::inventory::Inventory;
    use crate::models::record::Expiration;
    use crate::models::status::{ DaysRemaining, Urgency };
    use crate::tests::{ date, setup, stored };

    fn today() -> chrono::NaiveDate {
        date(2024, 1, 1)
    }

    #[test]
    fn warning_when_expiring_within_window() {
        setup();
        let expiration = Expiration::from_stored("2024-02-01");
        assert_eq!(days_remaining(&expiration, today()), DaysRemaining::Days(31));
        assert_eq!(classify(&expiration, today()), Urgency::Warning);
    }

    #[test]
    fn window_boundaries() {
        assert_eq!(urgency_for_days(-1), Urgency::Expired);
        assert_eq!(urgency_for_days(0), Urgency::Warning);
        assert_eq!(urgency_for_days(WARNING_WINDOW_DAYS), Urgency::Warning);
        assert_eq!(urgency_for_days(WARNING_WINDOW_DAYS + 1), Urgency::Ok);
    }

    #[test]
    fn expired_in_the_past() {
        let expiration = Expiration::from_stored("2023-01-01");
        assert_eq!(days_remaining(&expiration, today()), DaysRemaining::Days(-365));
        assert_eq!(classify(&expiration, today()), Urgency::Expired);
    }

    #[test]
    fn lifetime_is_always_ok() {
        let expiration = Expiration::from_stored("vitalício");
        assert_eq!(expiration, Expiration::lifetime());
        for day in [date(1970, 1, 1), today(), date(9999, 12, 31)] {
            assert_eq!(classify(&expiration, day), Urgency::Ok);
        }
        assert_eq!(days_remaining(&expiration, today()).to_string(), "∞");
    }

    #[test]
    fn unparseable_is_unknown() {
        let expiration = Expiration::from_stored("not-a-date");
        assert_eq!(classify(&expiration, today()), Urgency::Unknown);
        assert_eq!(days_remaining(&expiration, today()).to_string(), "?");
    }

    #[test]
    fn stored_display_format_is_not_a_date() {
        // Only the canonical format is valid on disk
        let expiration = Expiration::from_stored("01-02-2024");
        assert_eq!(expiration, Expiration::Unparsed("01-02-2024".to_string()));
        assert_eq!(classify(&expiration, today()), Urgency::Unknown);
    }

    #[test]
    fn two_digit_years_are_not_dates() {
        for raw in ["24-01-01", "01-02-03"] {
            let expiration = Expiration::from_stored(raw);
            assert_eq!(expiration, Expiration::Unparsed(raw.to_string()));
            assert_eq!(classify(&expiration, today()), Urgency::Unknown);
            assert_eq!(expiration.to_stored(), raw);
        }
    }

    #[test]
    fn describe_builds_presentation_row() {
        let inventory = Inventory::new(vec![
            stored("Alpha CAD", "2024-02-01", "sim"),
            stored("Charlie OS", "vitalício", "nao"),
            stored("Delta Suite", "not-a-date", ""),
        ]);
        let entries = inventory.entries();

        let alpha = describe(&entries[0], today());
        assert_eq!(alpha.expiration, "01-02-2024");
        assert_eq!(alpha.days_remaining, DaysRemaining::Days(31));
        assert_eq!(alpha.urgency, Urgency::Warning);
        assert!(alpha.renew_checked);

        let charlie = describe(&entries[1], today());
        assert_eq!(charlie.expiration, "Vitalício");
        assert_eq!(charlie.days_remaining, DaysRemaining::Infinite);
        assert!(!charlie.renew_checked);

        let delta = describe(&entries[2], today());
        assert_eq!(delta.expiration, "not-a-date");
        assert_eq!(delta.urgency, Urgency::Unknown);
        assert!(!delta.renew_checked);
    }
}
