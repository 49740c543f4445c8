//! Payout engine tests
//!
//! Verifies the index buckets, the weighted aggregation, the subsidy and
//! pre-payout rules and the end-to-end calculator scenario.

use chrono::Utc;
use proptest::prelude::*;
use shared::{
    calculate_payout, CoreError, DisasterEvent, DisasterSeverity, DisasterType,
    FarmerBehaviorProfile, Language, PayoutEngine, PayoutRecommendation, PayoutRequest,
    PolicyParameters, PriceObservation, RegionProfile, WeatherObservation,
};

fn weather(wind_speed: f64, precipitation: f64) -> WeatherObservation {
    WeatherObservation {
        station_id: "59278".to_string(),
        station_name: "湛江".to_string(),
        temperature_celsius: 26.0,
        humidity_percent: 85.0,
        wind_speed,
        precipitation,
        pressure_hpa: 998.0,
        timestamp: Utc::now(),
    }
}

fn typhoon(severity: DisasterSeverity) -> DisasterEvent {
    DisasterEvent {
        id: "D001".to_string(),
        disaster_type: DisasterType::Typhoon,
        severity,
        affected_area: "湛江、阳江".to_string(),
        start_time: Utc::now(),
        end_time: None,
        wind_speed: Some(35.0),
        precipitation: None,
        description: "2026年第3号台风登陆粤西地区".to_string(),
    }
}

fn price(market_price: f64, trigger_price: f64) -> PriceObservation {
    PriceObservation {
        date: None,
        variety: "妃子笑".to_string(),
        region: "广东".to_string(),
        market_price,
        predicted_price: 18.0,
        trigger_price,
    }
}

fn policy() -> PolicyParameters {
    PolicyParameters {
        orchard_area: 10.0,
        yield_per_unit_area: 1200.0,
        base_price: 18.0,
    }
}

fn scenario() -> PayoutRequest {
    PayoutRequest {
        weather: weather(35.0, 100.0),
        disaster: Some(typhoon(DisasterSeverity::High)),
        disaster_events: Vec::new(),
        price: price(12.5, 16.1),
        behavior: FarmerBehaviorProfile::fully_prepared("F001"),
        region: RegionProfile::with_risk_level("茂名", 1.1),
        policy: policy(),
        language: Language::Chinese,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_end_to_end_calculator_scenario() {
        let result = PayoutEngine::new().calculate(&scenario()).unwrap();

        assert_eq!(result.disaster_index, 0.95);
        assert_eq!(result.price_index, 0.6);
        assert_eq!(result.behavior_index, 1.0);
        assert!((result.region_index - 0.6).abs() < 1e-9);
        assert!((result.total_payout_index - 0.7825).abs() < 1e-9);
        assert!((result.payout_amount - 169_020.0).abs() < 1e-6);
        assert!((result.pre_payout_amount - 84_510.0).abs() < 1e-6);
        assert!((result.government_subsidy - 50_706.0).abs() < 1e-6);
        assert!((result.max_payout - 205_200.0).abs() < 1e-6);
        assert_eq!(result.recommendation, "建议立即启动预赔付通道");
    }

    /// All four indices zero gives a zero payout
    #[test]
    fn test_zero_indices_zero_payout() {
        let request = PayoutRequest {
            weather: weather(0.0, 0.0),
            disaster: None,
            disaster_events: Vec::new(),
            price: price(17.0, 16.1),
            behavior: FarmerBehaviorProfile::default(),
            region: RegionProfile::with_risk_level("漳州", 0.8),
            policy: policy(),
            language: Language::English,
        };
        let result = PayoutEngine::new().calculate(&request).unwrap();

        assert_eq!(result.total_payout_index, 0.0);
        assert_eq!(result.payout_amount, 0.0);
        assert_eq!(result.pre_payout_amount, 0.0);
        assert_eq!(result.government_subsidy, 0.0);
        assert_eq!(
            result.recommendation_kind,
            PayoutRecommendation::StrengthenPrevention
        );
    }

    /// Drop rate 0.2236 sits in the (0.1, 0.25] bracket
    #[test]
    fn test_moderate_price_drop_subsidy() {
        let mut request = scenario();
        request.disaster = None;
        request.weather = weather(5.0, 10.0);
        let result = PayoutEngine::new().calculate(&request).unwrap();

        assert_eq!(result.price_index, 0.6);
        assert!((result.government_subsidy - result.payout_amount * 0.3).abs() < 1e-9);
        assert_eq!(result.recommendation_kind, PayoutRecommendation::ContinueMonitoring);
    }

    #[test]
    fn test_severe_price_drop_recommends_price_protection() {
        let mut request = scenario();
        request.disaster = None;
        request.weather = weather(5.0, 10.0);
        request.price = price(10.0, 16.1);
        let result = PayoutEngine::new().calculate(&request).unwrap();

        assert_eq!(result.price_index, 0.8);
        assert!((result.government_subsidy - result.payout_amount * 0.5).abs() < 1e-9);
        assert_eq!(result.recommendation_kind, PayoutRecommendation::PriceProtection);
    }

    #[test]
    fn test_invalid_policy_parameters() {
        let mut request = scenario();
        request.price.trigger_price = 0.0;
        assert!(matches!(
            PayoutEngine::new().calculate(&request),
            Err(CoreError::InvalidPolicyParameters { .. })
        ));

        let mut request = scenario();
        request.policy.orchard_area = 0.0;
        assert!(matches!(
            PayoutEngine::new().calculate(&request),
            Err(CoreError::InvalidPolicyParameters { .. })
        ));

        let mut request = scenario();
        request.weather.wind_speed = f64::NAN;
        assert!(matches!(
            PayoutEngine::new().calculate(&request),
            Err(CoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_payout_request_from_json() {
        let json = r#"{
            "weather": {"station_name": "湛江", "temperature_celsius": 26, "humidity_percent": 85,
                        "wind_speed": 35, "precipitation": 100, "pressure_hpa": 998,
                        "timestamp": "2026-02-17T10:00:00Z"},
            "disaster": {"type": "typhoon", "severity": "high", "affected_area": "湛江、阳江",
                         "start_time": "2026-02-15T08:00:00Z"},
            "price": {"market_price": 12.5, "trigger_price": 16.1},
            "behavior": {"has_windproof_net": true, "has_spray_prevention": true,
                         "has_drainage": true, "has_group_insurance": true},
            "region": {"name": "茂名", "risk_level": 1.1},
            "policy": {"orchard_area": 10, "yield_per_unit_area": 1200, "base_price": 18},
            "language": "english"
        }"#;
        let request: PayoutRequest = serde_json::from_str(json).unwrap();
        let result = PayoutEngine::new().calculate(&request).unwrap();
        assert!((result.payout_amount - 169_020.0).abs() < 1e-6);
        assert_eq!(result.recommendation, "Activate emergency pre-payout channel");
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn severity_strategy() -> impl Strategy<Value = Option<DisasterSeverity>> {
        prop_oneof![
            Just(None),
            Just(Some(DisasterSeverity::Low)),
            Just(Some(DisasterSeverity::Medium)),
            Just(Some(DisasterSeverity::High)),
            Just(Some(DisasterSeverity::Extreme)),
        ]
    }

    fn behavior_strategy() -> impl Strategy<Value = FarmerBehaviorProfile> {
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(net, spray, drainage, group)| FarmerBehaviorProfile {
                has_windproof_net: net,
                has_spray_prevention: spray,
                has_drainage: drainage,
                has_group_insurance: group,
                ..Default::default()
            },
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Indices stay in [0, 1], payout is capped, max payout ignores indices
        #[test]
        fn prop_payout_invariants(
            wind in 0.0f64..80.0,
            rain in 0.0f64..300.0,
            severity in severity_strategy(),
            market in 0.0f64..30.0,
            trigger in 1.0f64..30.0,
            behavior in behavior_strategy(),
            risk in 0.8f64..=1.3,
            area in 0.1f64..100.0,
            yield_per in 1.0f64..3000.0,
            base in 0.0f64..50.0
        ) {
            let disaster = severity.map(typhoon);
            let policy = PolicyParameters { orchard_area: area, yield_per_unit_area: yield_per, base_price: base };
            let result = calculate_payout(
                &weather(wind, rain),
                disaster.as_ref(),
                &price(market, trigger),
                &behavior,
                &RegionProfile::with_risk_level("r", risk),
                &policy,
                Language::Chinese,
            ).unwrap();

            for index in [result.disaster_index, result.price_index, result.behavior_index, result.region_index, result.total_payout_index] {
                prop_assert!((0.0..=1.0).contains(&index));
            }
            prop_assert!([0.0, 0.3, 0.7, 0.95].contains(&result.disaster_index));
            prop_assert!([0.0, 0.6, 0.8, 0.95].contains(&result.price_index));

            let expected_max = 0.95 * area * yield_per * base;
            prop_assert!((result.max_payout - expected_max).abs() <= 1e-9 * expected_max.max(1.0));
            prop_assert!(result.payout_amount <= result.max_payout);
            prop_assert!((result.pre_payout_amount - result.payout_amount * 0.5).abs() < 1e-9 * result.payout_amount.max(1.0));
        }

        /// Identical inputs give bit-identical results
        #[test]
        fn prop_idempotent(market in 0.0f64..30.0, risk in 0.8f64..=1.3, wind in 0.0f64..60.0) {
            let mut request = scenario();
            request.price.market_price = market;
            request.region.risk_level = risk;
            request.weather.wind_speed = wind;

            let engine = PayoutEngine::new();
            let first = engine.calculate(&request).unwrap();
            let second = engine.calculate(&request).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
