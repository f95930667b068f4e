#[cfg(test)]
mod tests {
    use takt::libs::storage::{StorageTarget, TaskStore};
    use takt::libs::task::{TaskFilter, TaskStatus};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct FilterTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for FilterTestContext {
        fn setup() -> Self {
            FilterTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl FilterTestContext {
        /// Opens a fresh SQLite store, which bootstraps the seed tasks.
        fn seeded_store(&self) -> TaskStore {
            let target = StorageTarget::Sqlite(self.temp_dir.path().join("tasks.sqlite"));
            TaskStore::open(&target).unwrap()
        }
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_seed_bootstrap_yields_three_tasks(ctx: &mut FilterTestContext) {
        let mut store = ctx.seeded_store();

        let mut titles: Vec<String> = store
            .load(&TaskFilter::default())
            .unwrap()
            .into_iter()
            .map(|task| task.title)
            .collect();
        titles.sort();

        assert_eq!(titles, vec!["Homework", "Laundry", "Museum"]);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_reopening_does_not_reseed(ctx: &mut FilterTestContext) {
        let path = ctx.temp_dir.path().join("tasks.sqlite");
        let target = StorageTarget::Sqlite(path);

        let mut first = TaskStore::open(&target).unwrap();
        assert_eq!(first.load(&TaskFilter::default()).unwrap().len(), 3);
        drop(first);

        let mut second = TaskStore::open(&target).unwrap();
        assert_eq!(second.load(&TaskFilter::default()).unwrap().len(), 3);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_content_filter_finds_homework(ctx: &mut FilterTestContext) {
        let mut store = ctx.seeded_store();

        let filter = TaskFilter {
            content: "Math".to_string(),
            ..Default::default()
        };
        let tasks = store.load(&filter).unwrap();

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Homework");
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_content_filter_is_case_sensitive(ctx: &mut FilterTestContext) {
        let mut store = ctx.seeded_store();

        let filter = TaskFilter {
            content: "math".to_string(),
            ..Default::default()
        };
        assert!(store.load(&filter).unwrap().is_empty());
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_status_filter_returns_exact_subset(ctx: &mut FilterTestContext) {
        let mut store = ctx.seeded_store();

        // Complete one seed task, then filter on Completed.
        let mut homework = store
            .load(&TaskFilter {
                content: "Homework".to_string(),
                ..Default::default()
            })
            .unwrap()
            .remove(0);
        homework.status = TaskStatus::Completed;
        homework.completion_note = "handed in".to_string();
        store.update(&homework).unwrap();

        let completed = store
            .load(&TaskFilter {
                statuses: vec![TaskStatus::Completed],
                ..Default::default()
            })
            .unwrap();

        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, homework.id);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_urgency_filter(ctx: &mut FilterTestContext) {
        let mut store = ctx.seeded_store();

        let urgent = store
            .load(&TaskFilter {
                urgencies: vec![4, 5],
                ..Default::default()
            })
            .unwrap();

        let mut titles: Vec<String> = urgent.into_iter().map(|task| task.title).collect();
        titles.sort();
        assert_eq!(titles, vec!["Homework", "Museum"]);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_filters_combine_with_and(ctx: &mut FilterTestContext) {
        let mut store = ctx.seeded_store();

        // Urgency matches Homework, content matches Laundry: nothing
        // satisfies both.
        let filter = TaskFilter {
            urgencies: vec![5],
            content: "Wash".to_string(),
            ..Default::default()
        };
        assert!(store.load(&filter).unwrap().is_empty());
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_content_filter_is_injection_safe(ctx: &mut FilterTestContext) {
        let mut store = ctx.seeded_store();

        let filter = TaskFilter {
            content: "' OR '1'='1".to_string(),
            ..Default::default()
        };
        // The payload is treated as a literal substring, which no seed
        // task contains.
        assert!(store.load(&filter).unwrap().is_empty());
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_both_backends_agree_on_filters(ctx: &mut FilterTestContext) {
        let flat_target = StorageTarget::FlatFile(ctx.temp_dir.path().join("tasks.csv"));
        let mut flat = TaskStore::open(&flat_target).unwrap();
        let mut sqlite = ctx.seeded_store();

        // Mirror the seed data into the flat file.
        for task in sqlite.load(&TaskFilter::default()).unwrap() {
            flat.save(&task).unwrap();
        }

        for filter in [
            TaskFilter::default(),
            TaskFilter {
                statuses: vec![TaskStatus::Created],
                ..Default::default()
            },
            TaskFilter {
                urgencies: vec![3],
                ..Default::default()
            },
            TaskFilter {
                content: "things".to_string(),
                ..Default::default()
            },
        ] {
            let mut flat_ids: Vec<String> = flat.load(&filter).unwrap().into_iter().map(|t| t.id).collect();
            let mut sqlite_ids: Vec<String> = sqlite.load(&filter).unwrap().into_iter().map(|t| t.id).collect();
            flat_ids.sort();
            sqlite_ids.sort();
            assert_eq!(flat_ids, sqlite_ids);
        }
    }
}
