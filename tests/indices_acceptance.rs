use waterlogger_rs::{
    AppError, Measurements, UnitSystem, calculate_indices, celsius_to_fahrenheit,
    compute_summary, convert_measurement, fahrenheit_to_celsius, ph_saturation,
};

fn measured(ph: f64, tds: Option<f64>, ch: f64, ta: f64) -> Measurements {
    Measurements {
        fc: 2.5,
        tc: 2.7,
        ph,
        ta,
        ch,
        temperature: 78.0,
        tds,
        cya: Some(40.0),
        ..Default::default()
    }
}

#[test]
fn fully_measured_sample_has_no_comment_and_finite_indices() {
    let idx = calculate_indices(Some(&measured(7.5, Some(300.0), 250.0, 100.0))).unwrap();
    assert!(idx.comment.is_none());
    assert!(idx.lsi.unwrap().is_finite());
    assert!(idx.rsi.unwrap().is_finite());
}

#[test]
fn all_defaults_produce_full_estimation_comment() {
    let idx = calculate_indices(Some(&measured(7.5, None, 0.0, 0.0))).unwrap();
    assert_eq!(
        idx.comment.as_deref(),
        Some(
            "Estimated. Calculated with mid-range defaults for the following parameters that were missing: TDS, Calcium Hardness, Total Alkalinity"
        )
    );
}

#[test]
fn missing_calcium_hardness_only_is_named_alone() {
    let idx = calculate_indices(Some(&measured(7.5, Some(450.0), 0.0, 90.0))).unwrap();
    let comment = idx.comment.unwrap();
    assert!(comment.ends_with(": Calcium Hardness"), "{comment}");
    assert!(!comment.contains("TDS"));
    assert!(!comment.contains("Total Alkalinity"));
}

#[test]
fn absent_record_is_invalid_input() {
    let err = calculate_indices(None).unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn lsi_and_rsi_agree_with_independently_computed_phs() {
    let cases = [
        measured(7.2, Some(1_500.0), 180.0, 70.0),
        measured(7.8, None, 320.0, 0.0),
        measured(6.9, Some(20_000.0), 0.0, 140.0),
        Measurements {
            temperature: 104.0,
            ..measured(7.4, Some(800.0), 150.0, 80.0)
        },
    ];
    for m in &cases {
        let s = compute_summary(m).unwrap();
        let phs = ph_saturation(
            fahrenheit_to_celsius(m.temperature),
            s.inputs.tds,
            s.inputs.ch,
            s.inputs.ta,
        );
        let idx = calculate_indices(Some(m)).unwrap();
        assert!((idx.lsi.unwrap() - (m.ph - phs)).abs() < 1e-12);
        assert!((idx.rsi.unwrap() - (2.0 * phs - m.ph)).abs() < 1e-12);
    }
}

#[test]
fn hot_tub_water_tends_more_scaling_than_cold_pool() {
    let cold = Measurements {
        temperature: 60.0,
        ..measured(7.5, Some(300.0), 250.0, 100.0)
    };
    let hot = Measurements {
        temperature: 102.0,
        ..measured(7.5, Some(300.0), 250.0, 100.0)
    };
    let lsi_cold = calculate_indices(Some(&cold)).unwrap().lsi.unwrap();
    let lsi_hot = calculate_indices(Some(&hot)).unwrap().lsi.unwrap();
    assert!(lsi_hot > lsi_cold);
}

#[test]
fn metric_temperature_converts_to_the_same_indices() {
    let imperial = measured(7.5, Some(300.0), 250.0, 100.0);
    let celsius = fahrenheit_to_celsius(imperial.temperature);
    let back = convert_measurement(celsius, "temperature", UnitSystem::Metric).unwrap();
    assert!((back - celsius_to_fahrenheit(celsius)).abs() < 1e-12);

    let metric = Measurements {
        temperature: back,
        ..imperial.clone()
    };
    let a = calculate_indices(Some(&imperial)).unwrap().lsi.unwrap();
    let b = calculate_indices(Some(&metric)).unwrap().lsi.unwrap();
    assert!((a - b).abs() < 1e-9);
}
