#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};
    use daily_wisdom_bot::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::sync::Arc;
    use std::time::Duration;

    // Helper to build a cache over shared in-memory storage and a manual clock
    fn create_test_cache() -> (DailyCache, MemoryStore, Arc<ManualClock>) {
        let store = MemoryStore::new();
        let clock = Arc::new(ManualClock::new(Local.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()));
        let cache = DailyCache::new(Box::new(store.clone()), clock.clone());
        (cache, store, clock)
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let (cache, _store, _clock) = create_test_cache();

        cache.save("Quote A\n\nترجمة A", true).unwrap();
        let record = cache.load().unwrap();

        assert_eq!(record.thought, "Quote A\n\nترجمة A");
        assert!(record.is_arabic);
        assert_eq!(record.date, "2024-03-01");
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let clock = Arc::new(ManualClock::new(Local.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()));
        let cache = DailyCache::new(Box::new(FileStore::new(dir.path().join("store"))), clock.clone());

        assert!(cache.load().is_none());
        let saved = cache.save("Patience\n\nالصبر", false).unwrap();

        // A second cache over the same directory sees the same record
        let reopened = DailyCache::new(Box::new(FileStore::new(dir.path().join("store"))), clock);
        assert_eq!(reopened.load(), Some(saved));
        assert!(dir.path().join("store").join("dailyThought.json").exists());
    }

    #[test]
    fn test_stored_layout_uses_expected_keys() {
        let (cache, store, clock) = create_test_cache();
        cache.save("one\n\nاثنان", false).unwrap();

        let raw = store.get(STORAGE_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(value["thought"], "one\n\nاثنان");
        assert_eq!(value["date"], "2024-03-01");
        assert_eq!(value["lastRegenerated"], clock.now_ms());
        assert_eq!(value["isArabic"], false);
    }

    #[test]
    fn test_unparseable_payload_loads_as_absent() {
        let (cache, store, _clock) = create_test_cache();
        store.set(STORAGE_KEY, "{not json").unwrap();

        assert!(cache.load().is_none());
    }

    #[test]
    fn test_record_without_optional_fields() {
        let (cache, store, _clock) = create_test_cache();
        store
            .set(STORAGE_KEY, r#"{"thought":"a\n\nb","date":"2024-03-01"}"#)
            .unwrap();

        let record = cache.load().unwrap();
        assert_eq!(record.last_regenerated, None);
        assert!(!record.is_arabic);
        assert!(cache.can_regenerate(Some(&record)));
        assert_eq!(cache.time_until_regeneration(Some(&record)), Duration::ZERO);
    }

    #[test]
    fn test_extreme_timestamps_do_not_overflow() {
        let (cache, store, _clock) = create_test_cache();

        store
            .set(
                STORAGE_KEY,
                r#"{"thought":"a\n\nb","date":"2024-03-01","lastRegenerated":-9223372036854775808}"#,
            )
            .unwrap();
        let ancient = cache.load().unwrap();
        assert_eq!(ancient.last_regenerated, Some(i64::MIN));
        assert!(cache.can_regenerate(Some(&ancient)));
        assert_eq!(cache.time_until_regeneration(Some(&ancient)), Duration::ZERO);

        store
            .set(
                STORAGE_KEY,
                r#"{"thought":"a\n\nb","date":"2024-03-01","lastRegenerated":9223372036854775807}"#,
            )
            .unwrap();
        let far_future = cache.load().unwrap();
        assert!(!cache.can_regenerate(Some(&far_future)));
        assert!(cache.time_until_regeneration(Some(&far_future)) > REGENERATION_COOLDOWN);
    }

    #[test]
    fn test_is_fresh_tracks_local_calendar_day() {
        let (cache, _store, clock) = create_test_cache();
        let record = cache.save("text", false).unwrap();
        assert!(cache.is_fresh(&record));

        clock.advance(Duration::from_secs(11 * 60 * 60));
        assert!(cache.is_fresh(&record), "still 2024-03-01 at 23:00");

        clock.advance(Duration::from_secs(60 * 60));
        assert!(!cache.is_fresh(&record));
    }

    #[test]
    fn test_cooldown_after_save() {
        let (cache, _store, clock) = create_test_cache();
        assert!(cache.can_regenerate(None));
        assert_eq!(cache.time_until_regeneration(None), Duration::ZERO);

        let record = cache.save("text", false).unwrap();
        assert!(!cache.can_regenerate(Some(&record)));

        clock.advance(Duration::from_millis(9_999));
        assert!(!cache.can_regenerate(Some(&record)));
        assert_eq!(cache.time_until_regeneration(Some(&record)), Duration::from_millis(1));

        clock.advance(Duration::from_millis(1));
        assert!(cache.can_regenerate(Some(&record)));
        assert_eq!(cache.time_until_regeneration(Some(&record)), Duration::ZERO);
    }

    #[test]
    fn test_time_until_regeneration_decreases_to_zero() {
        let (cache, _store, clock) = create_test_cache();
        let record = cache.save("text", false).unwrap();

        let mut previous = cache.time_until_regeneration(Some(&record));
        assert_eq!(previous, REGENERATION_COOLDOWN);

        for _ in 0..9 {
            clock.advance(Duration::from_secs(1));
            let current = cache.time_until_regeneration(Some(&record));
            assert!(current < previous);
            previous = current;
        }

        clock.advance(Duration::from_secs(1));
        assert_eq!(cache.time_until_regeneration(Some(&record)), Duration::ZERO);
        clock.advance(Duration::from_secs(30));
        assert_eq!(cache.time_until_regeneration(Some(&record)), Duration::ZERO);
    }

    #[test]
    fn test_cooldown_survives_midnight() {
        let (cache, _store, clock) = create_test_cache();
        clock.set(Local.with_ymd_and_hms(2024, 3, 1, 23, 59, 55).unwrap());
        let record = cache.save("late thought", false).unwrap();

        clock.advance(Duration::from_secs(5));
        assert!(!cache.is_fresh(&record));
        assert!(!cache.can_regenerate(Some(&record)));
        assert_eq!(cache.time_until_regeneration(Some(&record)), Duration::from_secs(5));
    }

    #[test]
    fn test_language_preference_keeps_date_and_timestamp() {
        let (cache, _store, clock) = create_test_cache();
        let saved = cache.save("text\n\nنص", false).unwrap();

        clock.advance(Duration::from_secs(3));
        let updated = cache.set_language_preference(true).unwrap();

        assert!(updated.is_arabic);
        assert_eq!(updated.date, saved.date);
        assert_eq!(updated.last_regenerated, saved.last_regenerated);
        assert_eq!(cache.load(), Some(updated));
    }

    #[test]
    fn test_language_preference_without_record() {
        let (cache, _store, _clock) = create_test_cache();
        assert!(matches!(cache.set_language_preference(true), Err(StorageError::Missing)));
    }

    #[test]
    fn test_thought_parse_and_order() {
        let thought = Thought::parse("Quote A\n\nترجمة A");
        assert_eq!(thought, Thought::new("Quote A", "ترجمة A"));
        assert_eq!(thought.combined(), "Quote A\n\nترجمة A");
        assert_eq!(thought.ordered(false), vec!["Quote A", "ترجمة A"]);
        assert_eq!(thought.ordered(true), vec!["ترجمة A", "Quote A"]);

        let lone = Thought::parse("only english");
        assert_eq!(lone.arabic, "");
        assert_eq!(lone.ordered(true), vec!["only english"]);
    }

    #[test]
    fn test_clean_statement() {
        assert_eq!(clean_statement("  \"Be kind; be brave.\"\n").unwrap(), "Be kind; be brave.");
        assert_eq!(clean_statement("“**Know** yourself”").unwrap(), "Know yourself");
        assert_eq!(clean_statement("'single'").unwrap(), "single");
        assert!(matches!(clean_statement("  \"\"  "), Err(ProviderError::EmptyResponse)));
        assert!(matches!(clean_statement("****"), Err(ProviderError::EmptyResponse)));
    }

    #[test]
    fn test_fallbacks_are_paired_by_index() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(fallback_count(), 3);

        for _ in 0..20 {
            let primary = fallback_primary_statement(&mut rng);
            let pair = fallback_pair(primary.index).unwrap();
            assert_eq!(pair.primary, primary.text);
            assert_eq!(fallback_translated_statement(Some(primary.index), &mut rng), pair.arabic);

            let thought = fallback_thought(&mut rng);
            assert!((0..fallback_count()).any(|i| fallback_pair(i) == Some(thought.clone())));
        }

        let any = fallback_translated_statement(None, &mut rng);
        assert!((0..fallback_count()).any(|i| fallback_pair(i).unwrap().arabic == any));
        assert!(fallback_pair(fallback_count()).is_none());
    }

    #[test]
    fn test_format_remaining_rounds_up() {
        assert_eq!(format_remaining(Duration::from_millis(7_000)), "7s");
        assert_eq!(format_remaining(Duration::from_millis(6_200)), "7s");
        assert_eq!(format_remaining(Duration::from_millis(1)), "1s");
        assert_eq!(format_remaining(Duration::ZERO), "0s");
    }

    #[test]
    fn test_countdown_ticks_to_zero() {
        let mut countdown = Countdown::default();
        assert!(!countdown.is_active());

        countdown.start(Duration::from_millis(2_500));
        assert_eq!(countdown.tick(), Duration::from_millis(1_500));
        assert_eq!(countdown.tick(), Duration::from_millis(500));
        assert_eq!(countdown.tick(), Duration::ZERO);
        assert_eq!(countdown.tick(), Duration::ZERO);
        assert!(!countdown.is_active());
    }

    #[test]
    fn test_config_defaults_and_overrides() {
        let defaults = Config::from_lookup(|_| None);
        assert_eq!(defaults.gemini_api_key, None);
        assert_eq!(defaults.gemini_model, DEFAULT_MODEL);
        assert_eq!(defaults.gemini_base_url, DEFAULT_BASE_URL);
        assert_eq!(defaults.store_dir, std::path::PathBuf::from(DEFAULT_STORE_DIR));

        let custom = Config::from_lookup(|key| match key {
            "GEMINI_API_KEY" => Some(" secret ".to_string()),
            "GEMINI_MODEL" => Some("gemini-1.5-pro".to_string()),
            "WISDOM_STORE_DIR" => Some("/tmp/wisdom".to_string()),
            "GEMINI_BASE_URL" => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(custom.gemini_api_key.as_deref(), Some("secret"));
        assert_eq!(custom.gemini_model, "gemini-1.5-pro");
        assert_eq!(custom.gemini_base_url, DEFAULT_BASE_URL);
        assert_eq!(custom.store_dir, std::path::PathBuf::from("/tmp/wisdom"));
    }

    #[test]
    fn test_keyboard_labels() {
        assert_eq!(RegenerateButton::Enabled.label(), "🔄 New Thought");
        assert_eq!(RegenerateButton::Waiting(Duration::from_millis(6_400)).label(), "⏳ Wait 7s");
        assert_eq!(RegenerateButton::Generating.label(), "⏳ Generating...");

        let keyboard = create_keyboard(RegenerateButton::Waiting(Duration::from_secs(3)), true);
        assert_eq!(keyboard.inline_keyboard.len(), 2);
        assert!(keyboard.inline_keyboard[1][1].text.starts_with("✅"));
        assert!(!keyboard.inline_keyboard[1][0].text.starts_with("✅"));
    }

    #[test]
    fn test_share_link_limits_length() {
        let link = share_link("Be kind; be brave.").unwrap();
        assert!(link.as_str().starts_with("https://t.me/share/url?url="));

        let long = "wisdom ".repeat(1_000);
        assert!(share_link(&long).is_none());
    }
}
