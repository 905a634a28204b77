use glw::window::{aspect_ratio, most_samples};
use glw::{CreationError, DemoError, WindowConfig};

#[test]
fn defaults() {
    let config = WindowConfig::new("Hello Graphics World");

    assert_eq!(config.title, "Hello Graphics World");
    assert_eq!((config.width, config.height), (1024, 768));
    assert_eq!(config.samples, 4);
    assert_eq!(config.gl_version, (4, 1));
    assert!(config.vsync);
    assert!(config.debug);
    assert_eq!(config.depth_bits, 24);
}

#[test]
fn builder() {
    let config = WindowConfig::default()
        .with_title("Cube")
        .with_inner_size(640, 480)
        .with_samples(0)
        .with_vsync(false)
        .with_gl_version(3, 3)
        .with_debug(false);

    assert_eq!(config.title, "Cube");
    assert_eq!((config.width, config.height), (640, 480));
    assert_eq!(config.samples, 0);
    assert!(!config.vsync);
    assert_eq!(config.gl_version, (3, 3));
    assert!(!config.debug);
}

#[test]
fn aspect() {
    assert_eq!(WindowConfig::new("").aspect_ratio(), 1024.0 / 768.0);
    assert_eq!(aspect_ratio(800, 400), 2.0);
}

#[test]
fn minimized_window_has_unit_aspect() {
    assert_eq!(aspect_ratio(0, 768), 1.0);
    assert_eq!(aspect_ratio(1024, 0), 1.0);
}

#[test]
fn no_config_is_an_error_not_a_panic() {
    let configs: Vec<u8> = Vec::new();
    assert_eq!(most_samples(configs, |&samples| samples), None);

    let err = DemoError::from(CreationError::NoConfig);
    assert_eq!(err.to_string(), "Couldn't open the window: No suitable GL config was found");
}

#[test]
fn most_samples_wins() {
    assert_eq!(most_samples(vec![0u8, 4, 2, 8, 1], |&samples| samples), Some(8));
}

#[test]
fn first_config_wins_on_ties() {
    let configs = vec![(4u8, "first"), (0, "none"), (4, "second")];

    assert_eq!(most_samples(configs, |&(samples, _)| samples), Some((4, "first")));
}

#[test]
fn single_sampled_config_is_accepted() {
    assert_eq!(most_samples(vec![0u8], |&samples| samples), Some(0));
}
