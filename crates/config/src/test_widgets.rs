#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn widget_row_is_edge_padded() {
        let row = widget_row();
        assert!(row.first().unwrap().is_spacer());
        assert!(row.last().unwrap().is_spacer());
    }

    #[test]
    fn widget_row_has_one_stretch_spacer() {
        let row = widget_row();
        let stretches = row
            .iter()
            .filter(|w| {
                matches!(
                    w,
                    Widget::Spacer {
                        length: SpacerLength::Stretch,
                        ..
                    }
                )
            })
            .count();
        assert_eq!(stretches, 1);
    }

    #[test]
    fn cpu_gauge_click_spawns_process_monitor() {
        let cfg = Config::build().unwrap();
        let row = &cfg.screens()[0].top.widgets;
        let cpu = row
            .iter()
            .find(|w| matches!(w, Widget::Gauge { kind: GaugeKind::Cpu, .. }))
            .unwrap();
        let action = cpu.on_click().unwrap();
        match action {
            Action::Spawn(spec) => {
                assert_eq!(spec.command(), format!("{} -e gtop", cfg.terminal()));
            }
            Action::Host(_) => panic!("cpu gauge click must spawn a process"),
        }
    }

    #[test]
    fn memory_gauge_shares_the_monitor_click() {
        let row = widget_row();
        let clicks: Vec<String> = row
            .iter()
            .filter(|w| {
                matches!(
                    w,
                    Widget::Gauge {
                        kind: GaugeKind::Cpu | GaugeKind::Memory,
                        ..
                    }
                )
            })
            .filter_map(Widget::on_click)
            .filter_map(|a| match a {
                Action::Spawn(spec) => Some(spec.command()),
                Action::Host(_) => None,
            })
            .collect();
        assert_eq!(clicks.len(), 2);
        assert_eq!(clicks[0], clicks[1]);
    }

    #[test]
    fn net_gauge_opens_the_network_menu() {
        let row = widget_row();
        let net = row
            .iter()
            .find(|w| matches!(w, Widget::Gauge { kind: GaugeKind::Net, .. }))
            .unwrap();
        match net.on_click().unwrap() {
            Action::Spawn(spec) => assert_eq!(spec.command(), "def-nmdmenu"),
            Action::Host(_) => panic!("net gauge click must spawn a process"),
        }
    }

    #[test]
    fn refreshing_gauges_declare_their_interval() {
        let row = widget_row();
        for widget in &row {
            if let Widget::Gauge { kind, .. } = widget {
                match kind {
                    GaugeKind::Cpu | GaugeKind::Memory | GaugeKind::Net => {
                        assert_eq!(widget.interval_secs(), Some(2));
                    }
                    GaugeKind::Battery | GaugeKind::Volume => {
                        assert_eq!(widget.interval_secs(), None);
                    }
                }
            }
        }
    }

    #[test]
    fn launcher_image_opens_the_app_menu() {
        let row = widget_row();
        let image = row
            .iter()
            .find(|w| matches!(w, Widget::Image { .. }))
            .unwrap();
        match image.on_click().unwrap() {
            Action::Spawn(spec) => assert_eq!(spec.command(), "rofi -show drun"),
            Action::Host(_) => panic!("launcher click must spawn a process"),
        }
    }

    #[test]
    fn clocks_come_in_date_then_time_order() {
        let row = widget_row();
        let formats: Vec<&str> = row
            .iter()
            .filter_map(|w| match w {
                Widget::Clock { format, .. } => Some(format.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(formats, vec!["%b %d-%Y", "%I:%M %p"]);
    }

    #[test]
    fn bar_geometry_matches_declaration() {
        let screens = screens();
        assert_eq!(screens.len(), 1);
        let bar = &screens[0].top;
        assert_eq!(bar.height, 35);
        assert_eq!(bar.margin, [5, 10, 0, 10]);
        assert!((bar.opacity - 0.9).abs() < f32::EPSILON);
    }

    #[test]
    fn systray_sits_before_the_trailing_spacer() {
        let row = widget_row();
        let tray_at = row
            .iter()
            .position(|w| matches!(w, Widget::Systray { .. }))
            .unwrap();
        assert_eq!(tray_at, row.len() - 2);
    }
}
