use super::*;

#[test]
fn device_metrics_match_viewport_at_unit_scale() {
    let metrics = device_metrics(Viewport {
        width: 3840,
        height: 2160,
    });

    assert_eq!(metrics.width, 3840);
    assert_eq!(metrics.height, 2160);
    assert_eq!(metrics.device_scale_factor, 1.0);
    assert!(!metrics.mobile);
    assert_eq!(metrics.scale, None);
    assert_eq!(metrics.screen_orientation, None);
}

#[test]
fn default_launcher_outlives_long_pauses() {
    let launcher = ChromeLauncher::default();
    assert!(launcher.executable.is_none());
    assert!(launcher.idle_timeout >= Duration::from_secs(60 * 60));
}
