#[cfg(test)]
mod tests {
    use crate::implementations::query::*;
    use crate::models::inventory::{ Inventory, RecordId };
    use crate::tests::{ date, setup, stored };

    fn today() -> chrono::NaiveDate {
        date(2024, 1, 1)
    }

    /// A: warning, B: expired, C: lifetime, D: unparseable, E: far future
    fn sample() -> Inventory {
        Inventory::new(vec![
            stored("Alpha CAD", "2024-02-01", "sim"),
            stored("Bravo Office", "2023-01-01", "nao"),
            stored("Charlie OS", "vitalício", "sim"),
            stored("Delta Suite", "not-a-date", "sim"),
            stored("Echo Antivirus", "2030-06-15", "sim"),
        ])
    }

    fn names(inventory: &Inventory, ids: &[RecordId]) -> Vec<String> {
        ids.iter()
            .map(|id| inventory.get(*id).expect("id in inventory").record.name.clone())
            .collect()
    }

    #[test]
    fn all_keeps_every_record_in_order() {
        setup();
        let inventory = sample();
        let ids = filter(&inventory, "", StatusFilter::All, today());
        assert_eq!(
            names(&inventory, &ids),
            ["Alpha CAD", "Bravo Office", "Charlie OS", "Delta Suite", "Echo Antivirus"]
        );
    }

    #[test]
    fn upcoming_and_expired_need_a_date() {
        let inventory = sample();
        let upcoming = filter(&inventory, "", StatusFilter::Upcoming, today());
        assert_eq!(names(&inventory, &upcoming), ["Alpha CAD"]);

        let expired = filter(&inventory, "", StatusFilter::Expired, today());
        assert_eq!(names(&inventory, &expired), ["Bravo Office"]);
    }

    #[test]
    fn upcoming_window_is_inclusive() {
        let inventory = Inventory::new(vec![
            stored("Today", "2024-01-01", "sim"),
            stored("Day 90", "2024-03-31", "sim"),
            stored("Day 91", "2024-04-01", "sim"),
            stored("Yesterday", "2023-12-31", "sim"),
        ]);
        let ids = filter(&inventory, "", StatusFilter::Upcoming, today());
        assert_eq!(names(&inventory, &ids), ["Today", "Day 90"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let inventory = sample();
        let ids = filter(&inventory, "  SUITE ", StatusFilter::All, today());
        assert_eq!(names(&inventory, &ids), ["Delta Suite"]);

        let ids = filter(&inventory, "o", StatusFilter::All, today());
        assert_eq!(names(&inventory, &ids), ["Bravo Office", "Charlie OS", "Echo Antivirus"]);
    }

    #[test]
    fn search_and_status_are_conjunctive() {
        let inventory = sample();
        assert!(filter(&inventory, "delta", StatusFilter::Upcoming, today()).is_empty());
        assert!(filter(&inventory, "alpha", StatusFilter::Expired, today()).is_empty());
        assert_eq!(filter(&inventory, "alpha", StatusFilter::Upcoming, today()).len(), 1);
    }

    #[test]
    fn status_filter_is_idempotent() {
        let inventory = sample();
        for status in StatusFilter::VARIANTS {
            let once = filter(&inventory, "", status, today());
            let subset = Inventory::new(
                once.iter().map(|id| inventory.get(*id).unwrap().record.clone()).collect()
            );
            let twice = filter(&subset, "", status, today());
            assert_eq!(names(&inventory, &once), names(&subset, &twice));
        }
    }

    #[test]
    fn ascending_date_puts_unparsed_first_and_lifetime_last() {
        let inventory = sample();
        let ids = apply_query(&inventory, &QueryOptions::default(), today());
        assert_eq!(
            names(&inventory, &ids),
            ["Delta Suite", "Bravo Office", "Alpha CAD", "Echo Antivirus", "Charlie OS"]
        );
    }

    #[test]
    fn ascending_days_puts_lifetime_last() {
        let inventory = sample();
        let options = QueryOptions {
            sort: SortState { key: SortKey::Days, ascending: true },
            ..QueryOptions::default()
        };
        let ids = apply_query(&inventory, &options, today());
        assert_eq!(
            names(&inventory, &ids),
            ["Delta Suite", "Bravo Office", "Alpha CAD", "Echo Antivirus", "Charlie OS"]
        );
    }

    #[test]
    fn descending_date_reverses_order() {
        let inventory = sample();
        let options = QueryOptions {
            sort: SortState { key: SortKey::Date, ascending: false },
            ..QueryOptions::default()
        };
        let ids = apply_query(&inventory, &options, today());
        assert_eq!(
            names(&inventory, &ids),
            ["Charlie OS", "Echo Antivirus", "Alpha CAD", "Bravo Office", "Delta Suite"]
        );
    }

    #[test]
    fn ties_keep_relative_order_in_both_directions() {
        let inventory = Inventory::new(vec![
            stored("First", "2024-05-01", "sim"),
            stored("Legacy 1", "31/12/2020", "sim"),
            stored("Second", "2024-05-01", "sim"),
            stored("Legacy 2", "unknown", "sim"),
            stored("Forever 1", "vitalício", "sim"),
            stored("Forever 2", "Vitalício", "sim"),
        ]);

        for key in [SortKey::Date, SortKey::Days] {
            let ascending = sort(
                &inventory,
                &filter(&inventory, "", StatusFilter::All, today()),
                SortState { key, ascending: true },
                today()
            );
            assert_eq!(
                names(&inventory, &ascending),
                ["Legacy 1", "Legacy 2", "First", "Second", "Forever 1", "Forever 2"]
            );

            let descending = sort(
                &inventory,
                &filter(&inventory, "", StatusFilter::All, today()),
                SortState { key, ascending: false },
                today()
            );
            assert_eq!(
                names(&inventory, &descending),
                ["Forever 1", "Forever 2", "First", "Second", "Legacy 1", "Legacy 2"]
            );
        }
    }

    #[test]
    fn sort_drops_unknown_ids() {
        let inventory = sample();
        let ids = sort(&inventory, &[RecordId(99), RecordId(1)], SortState::default(), today());
        assert_eq!(ids, [RecordId(1)]);
    }

    #[test]
    fn selecting_sort_key_toggles_direction() {
        let mut state = SortState::default();
        assert_eq!(state, SortState { key: SortKey::Date, ascending: true });

        state.select(SortKey::Date);
        assert_eq!(state, SortState { key: SortKey::Date, ascending: false });

        state.select(SortKey::Days);
        assert_eq!(state, SortState { key: SortKey::Days, ascending: true });

        state.select(SortKey::Days);
        assert_eq!(state, SortState { key: SortKey::Days, ascending: false });

        state.select(SortKey::Date);
        assert_eq!(state, SortState { key: SortKey::Date, ascending: true });
    }

    #[test]
    fn status_and_sort_parse_from_cli_words() {
        assert_eq!("todos".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!("Upcoming".parse::<StatusFilter>(), Ok(StatusFilter::Upcoming));
        assert_eq!("vencidos".parse::<StatusFilter>(), Ok(StatusFilter::Expired));
        assert!("soon".parse::<StatusFilter>().is_err());

        assert_eq!("dias".parse::<SortKey>(), Ok(SortKey::Days));
        assert_eq!("date".parse::<SortKey>(), Ok(SortKey::Date));
        assert!("name".parse::<SortKey>().is_err());
    }
}
