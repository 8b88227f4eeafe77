#[cfg(test)]
mod tests {
    use std::{io, path::PathBuf, sync::Mutex};

    use crate::{LifecycleEvent, Runner, StartupHooks, autostart_script_path};

    /// Records every invocation instead of touching the OS.
    #[derive(Default)]
    struct RecordingRunner {
        calls: Mutex<Vec<Vec<String>>>,
        spawns: Mutex<Vec<Vec<String>>>,
        call_status: i32,
    }

    impl Runner for RecordingRunner {
        fn call(&self, argv: &[String]) -> io::Result<i32> {
            self.calls.lock().unwrap().push(argv.to_vec());
            Ok(self.call_status)
        }

        fn spawn(&self, argv: &[String]) -> io::Result<()> {
            self.spawns.lock().unwrap().push(argv.to_vec());
            Ok(())
        }
    }

    #[test]
    fn autostart_path_is_under_the_config_dir() {
        let path = autostart_script_path();
        assert!(path.ends_with(".config/plank/scripts/autostart.sh"));
    }

    #[test]
    fn startup_once_runs_the_autostart_script_synchronously() {
        let script = PathBuf::from("/home/user/.config/plank/scripts/autostart.sh");
        let hooks = StartupHooks::with_autostart(script.clone());
        let runner = RecordingRunner::default();

        hooks
            .dispatch(LifecycleEvent::StartupOnce, &runner)
            .unwrap();

        let calls = runner.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], vec![script.to_string_lossy().into_owned()]);
        assert!(runner.spawns.lock().unwrap().is_empty());
    }

    #[test]
    fn startup_once_fires_at_most_once_across_reloads() {
        let hooks = StartupHooks::with_autostart(PathBuf::from("/tmp/autostart.sh"));
        let runner = RecordingRunner::default();

        for _ in 0..3 {
            hooks
                .dispatch(LifecycleEvent::StartupOnce, &runner)
                .unwrap();
        }

        assert_eq!(runner.calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn startup_once_tolerates_nonzero_exit() {
        let hooks = StartupHooks::with_autostart(PathBuf::from("/tmp/autostart.sh"));
        let runner = RecordingRunner {
            call_status: 1,
            ..RecordingRunner::default()
        };

        hooks
            .dispatch(LifecycleEvent::StartupOnce, &runner)
            .unwrap();
    }

    #[test]
    fn startup_spawns_the_cursor_tool_per_event() {
        let hooks = StartupHooks::with_autostart(PathBuf::from("/tmp/autostart.sh"));
        let runner = RecordingRunner::default();

        hooks.dispatch(LifecycleEvent::Startup, &runner).unwrap();
        hooks.dispatch(LifecycleEvent::Startup, &runner).unwrap();

        let spawns = runner.spawns.lock().unwrap();
        assert_eq!(spawns.len(), 2);
        for argv in spawns.iter() {
            assert_eq!(
                argv,
                &vec![
                    "xsetroot".to_string(),
                    "-cursor_name".to_string(),
                    "left_ptr".to_string()
                ]
            );
        }
        // Startup never runs anything synchronously.
        assert!(runner.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn startup_spawn_failure_is_swallowed() {
        struct FailingRunner;
        impl Runner for FailingRunner {
            fn call(&self, _argv: &[String]) -> io::Result<i32> {
                panic!("startup must not call synchronously");
            }
            fn spawn(&self, _argv: &[String]) -> io::Result<()> {
                Err(io::Error::new(io::ErrorKind::NotFound, "missing"))
            }
        }

        let hooks = StartupHooks::with_autostart(PathBuf::from("/tmp/autostart.sh"));
        assert!(hooks.dispatch(LifecycleEvent::Startup, &FailingRunner).is_ok());
    }
}
