#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::*;

    #[test]
    fn default_build_validates() {
        let cfg = Config::build().unwrap();
        assert_eq!(cfg.theme(), "material");
        assert_eq!(cfg.groups().len(), 5);
        assert_eq!(cfg.mouse().len(), 3);
    }

    #[test]
    fn every_group_gets_two_bindings_with_exact_label() {
        let cfg = Config::build().unwrap();
        for group in cfg.groups() {
            let for_group: Vec<&KeyBinding> = cfg
                .keys()
                .iter()
                .filter(|b| match &b.action {
                    Action::Host(cmd) => cmd.args.first() == Some(&group.name),
                    Action::Spawn(_) => false,
                })
                .collect();
            assert_eq!(for_group.len(), 2, "group {}", group.name);

            let names: HashSet<&str> = for_group
                .iter()
                .filter_map(|b| match &b.action {
                    Action::Host(cmd) => Some(cmd.name.as_str()),
                    Action::Spawn(_) => None,
                })
                .collect();
            assert!(names.contains("group.toscreen"));
            assert!(names.contains("window.togroup"));

            // The trigger key is the group label itself.
            for binding in for_group {
                assert_eq!(binding.key, group.name);
            }
        }
    }

    #[test]
    fn generated_bindings_preserve_group_order() {
        let cfg = Config::build().unwrap();
        let switch_labels: Vec<&str> = cfg
            .keys()
            .iter()
            .filter_map(|b| match &b.action {
                Action::Host(cmd) if cmd.name == "group.toscreen" => {
                    cmd.args.first().map(String::as_str)
                }
                _ => None,
            })
            .collect();
        let group_names: Vec<&str> = cfg.groups().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(switch_labels, group_names);
    }

    #[test]
    fn layout_table_is_nonempty_and_cycles_in_order() {
        let cfg = Config::build().unwrap();
        assert!(!cfg.layouts().is_empty());
        let kinds: Vec<LayoutKind> = cfg.layouts().iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![LayoutKind::MonadTall, LayoutKind::Columns, LayoutKind::Max]
        );
    }

    #[test]
    fn unknown_palette_is_rejected() {
        let err = Config::build_with_theme("solarized").unwrap_err();
        assert!(matches!(err, Error::UnknownPalette { .. }));
        assert!(err.pretty().contains("solarized"));
    }

    #[test]
    fn dracula_palette_builds() {
        let cfg = Config::build_with_theme("dracula").unwrap();
        assert_eq!(cfg.palette().background.as_str(), "#282a36");
    }

    #[test]
    fn registered_palettes_resolve_every_role() {
        for name in palette_names() {
            let palette = load_palette(name).unwrap();
            for role in [
                Role::Background,
                Role::Foreground,
                Role::Accent,
                Role::Muted,
                Role::Separator,
            ] {
                // rgb() falls back to white only for unparsed values, which
                // Color::parse has already excluded.
                let _rgb = palette.get(role).rgb();
                assert!(!palette.get(role).as_str().is_empty());
            }
        }
    }

    #[test]
    fn invalid_color_fails_construction() {
        assert!(matches!(
            Color::parse("#zzzzzz"),
            Err(Error::InvalidColor { .. })
        ));
    }

    #[test]
    fn floating_rules_keep_defaults_first() {
        let floating = FloatingRules::standard();
        let defaults = default_float_rules();
        assert!(floating.rules.len() > defaults.len());
        assert_eq!(&floating.rules[..defaults.len()], &defaults[..]);
        assert_eq!(
            floating.rules.last(),
            Some(&WindowMatch::title("pinentry"))
        );
    }

    #[test]
    fn floating_rules_first_match_wins() {
        let floating = FloatingRules::standard();
        // A dialog-typed window with a matching class hits the type rule
        // first because defaults precede explicit entries.
        let hit = floating
            .matches("ssh-askpass", "", Some(WindowType::Dialog))
            .unwrap();
        assert_eq!(hit, &WindowMatch::Type(WindowType::Dialog));

        let hit = floating.matches("ssh-askpass", "", None).unwrap();
        assert_eq!(hit, &WindowMatch::class("ssh-askpass"));

        assert!(floating.matches("xterm", "shell", None).is_none());
    }

    #[test]
    fn behavior_defaults_match_host_contract() {
        let behavior = Behavior::default();
        assert!(behavior.follow_mouse_focus);
        assert!(!behavior.bring_front_click);
        assert!(!behavior.cursor_warp);
        assert_eq!(
            behavior.focus_on_window_activation,
            ActivationFocus::Smart
        );
        assert_eq!(behavior.wmname, "LG3D");
    }

    #[test]
    fn config_serializes_to_json() {
        let cfg = Config::build().unwrap();
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains("\"group.toscreen\""));
        assert!(json.contains("\"monad_tall\""));
    }
}
