// Host-side tests for configuration defaults, colors and data-* overrides.

use backdrop_web::constants::*;
use backdrop_web::core::*;
use std::collections::HashMap;

fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    let map: HashMap<&str, &str> = pairs.iter().copied().collect();
    move |key: &str| map.get(key).map(|v| v.to_string())
}

#[test]
fn defaults_validate() {
    let c = BackdropConfig::default();
    assert!(c.validate().is_ok());
    assert_eq!(c.particles.count, DEFAULT_PARTICLE_COUNT);
    assert_eq!(c.particles.palette.len(), 4);
    assert_eq!(c.particles.palette[0], Rgb::new(0xff, 0x57, 0x22));
    assert!(c.particles.interactive);
    assert_eq!(c.follower.smooth_factor, 0.15);
    assert_eq!(c.follower.idle_timeout_ms, 3000.0);
    assert!(c.scroll.enabled);
    assert_eq!(c.reveal, RevealRegion::fade_up());
}

#[test]
fn hex_colors_parse_in_long_and_short_form() {
    assert_eq!(Rgb::from_hex("#3F51B5"), Ok(Rgb::new(0x3f, 0x51, 0xb5)));
    assert_eq!(Rgb::from_hex("4caf50"), Ok(Rgb::new(0x4c, 0xaf, 0x50)));
    assert_eq!(Rgb::from_hex("#abc"), Ok(Rgb::new(0xaa, 0xbb, 0xcc)));
    assert_eq!(Rgb::from_hex(" #fff "), Ok(Rgb::WHITE));
}

#[test]
fn malformed_colors_are_rejected() {
    for bad in ["", "#", "#12345", "#gg0000", "#1234567", "#ééé"] {
        assert!(
            matches!(Rgb::from_hex(bad), Err(ConfigError::InvalidColor(_))),
            "accepted {:?}",
            bad
        );
    }
}

#[test]
fn colors_render_as_lowercase_css() {
    assert_eq!(Rgb::new(0xff, 0x57, 0x22).to_css(), "#ff5722");
    assert_eq!(Rgb::new(0, 1, 2).to_string(), "#000102");
}

#[test]
fn color_lists_skip_blank_entries() {
    let list = Rgb::parse_list("#fff, #000 ,,").unwrap();
    assert_eq!(list, vec![Rgb::WHITE, Rgb::new(0, 0, 0)]);
    assert!(Rgb::parse_list("#fff,nope").is_err());
}

#[test]
fn overrides_replace_defaults() {
    let mut c = BackdropConfig::default();
    c.apply_overrides(lookup(&[
        ("particle-count", "80"),
        ("particle-colors", "#111111,#222222"),
        ("particle-size", "4.5"),
        ("particle-speed", "0.3"),
        ("interactive", "false"),
        ("smooth-factor", "0.3"),
        ("follower-color", "#00ff00"),
        ("follower-size", "20"),
        ("smooth-scroll", "off"),
    ]))
    .unwrap();
    assert_eq!(c.particles.count, 80);
    assert_eq!(
        c.particles.palette,
        vec![Rgb::new(0x11, 0x11, 0x11), Rgb::new(0x22, 0x22, 0x22)]
    );
    assert_eq!(c.particles.base_size, 4.5);
    assert_eq!(c.particles.speed, 0.3);
    assert!(!c.particles.interactive);
    assert_eq!(c.follower.smooth_factor, 0.3);
    assert_eq!(c.follower.color, Rgb::new(0, 0xff, 0));
    assert_eq!(c.follower.base_size, 20.0);
    assert!(!c.scroll.enabled);
}

#[test]
fn bare_flag_attribute_means_true() {
    let mut c = BackdropConfig::default();
    c.particles.interactive = false;
    c.apply_overrides(lookup(&[("interactive", "")])).unwrap();
    assert!(c.particles.interactive);
}

#[test]
fn missing_overrides_keep_defaults() {
    let mut c = BackdropConfig::default();
    c.apply_overrides(lookup(&[])).unwrap();
    assert_eq!(c, BackdropConfig::default());
}

#[test]
fn invalid_overrides_are_reported() {
    let cases: [(&str, &str, ConfigError); 5] = [
        (
            "particle-count",
            "many",
            ConfigError::Unparsable {
                key: "particle-count",
                value: "many".into(),
            },
        ),
        ("particle-colors", " , ", ConfigError::EmptyPalette),
        ("smooth-factor", "1.5", ConfigError::SmoothFactorOutOfRange(1.5)),
        ("smooth-factor", "0", ConfigError::SmoothFactorOutOfRange(0.0)),
        (
            "particle-speed",
            "-1",
            ConfigError::NegativeOrNonFinite {
                name: "particle speed",
                value: -1.0,
            },
        ),
    ];
    for (key, value, want) in cases {
        let mut c = BackdropConfig::default();
        assert_eq!(c.apply_overrides(lookup(&[(key, value)])), Err(want));
    }
}

#[test]
fn particle_count_is_bounded() {
    let mut c = BackdropConfig::default();
    let max = MAX_PARTICLE_COUNT.to_string();
    c.apply_overrides(lookup(&[("particle-count", max.as_str())]))
        .unwrap();
    assert_eq!(c.particles.count, MAX_PARTICLE_COUNT);

    let mut c = BackdropConfig::default();
    assert_eq!(
        c.apply_overrides(lookup(&[("particle-count", "100000000")])),
        Err(ConfigError::TooManyParticles {
            count: 100_000_000,
            max: MAX_PARTICLE_COUNT,
        })
    );
}

#[test]
fn error_messages_name_the_problem() {
    assert_eq!(ConfigError::EmptyPalette.to_string(), "particle palette is empty");
    let e = ConfigError::Unparsable {
        key: "interactive",
        value: "maybe".into(),
    };
    assert_eq!(e.to_string(), "could not parse interactive=\"maybe\"");
}

#[test]
fn quads_need_exactly_four_numbers() {
    assert_eq!(
        parse_quad("reveal-thresholds", "0, 0.1, 0.9, 1"),
        Ok([0.0, 0.1, 0.9, 1.0])
    );
    for bad in ["1,2,3", "1,2,3,4,5", "a,b,c,d", ""] {
        assert!(parse_quad("reveal-offset", bad).is_err(), "accepted {:?}", bad);
    }
}

#[test]
fn follower_is_skipped_on_narrow_or_touch_devices() {
    let f = FollowerParams::default();
    assert!(f.should_render(1024.0, false));
    assert!(!f.should_render(MOBILE_MAX_WIDTH, false));
    assert!(!f.should_render(1024.0, true));

    let always = FollowerParams {
        mobile_disabled: false,
        ..FollowerParams::default()
    };
    assert!(always.should_render(320.0, true));
}
