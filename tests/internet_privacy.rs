mod common;

use common::within;
use privacy_central::features::internet_privacy::{
    self, InternetPrivacyAction, InternetPrivacyEvent, InternetPrivacyFeature,
    InternetPrivacyState,
};
use privacy_central::flow::Scope;
use privacy_central::modules::memory::MemoryModules;
use privacy_central::modules::{InternetPrivacyMode, IpScramblerStatus, ModuleError};

fn feature(modules: &MemoryModules) -> InternetPrivacyFeature {
    internet_privacy::create(
        Scope::new(),
        InternetPrivacyState::default(),
        modules.ip_scrambler.clone(),
    )
}

async fn run(feature: &InternetPrivacyFeature, action: InternetPrivacyAction) {
    feature.submit(action).unwrap();
    within(feature.settle()).await;
}

#[tokio::test]
async fn hiding_ip_asks_for_vpn_consent_first() {
    let modules = common::modules();
    let feature = feature(&modules);
    let mut events = feature.single_events().unwrap();

    run(&feature, InternetPrivacyAction::UseHiddenIp).await;

    assert_eq!(feature.state().mode, InternetPrivacyMode::RealIp);
    match events.try_recv() {
        Some(InternetPrivacyEvent::StartVpnPrompt(prompt)) => assert!(!prompt.message.is_empty()),
        other => panic!("expected StartVpnPrompt, got {:?}", other),
    }
    assert_eq!(modules.ip_scrambler.current(), IpScramblerStatus::Off);
}

#[tokio::test]
async fn granted_consent_starts_scrambling() {
    let modules = common::modules();
    let feature = feature(&modules);
    let mut events = feature.single_events().unwrap();

    run(&feature, InternetPrivacyAction::UseHiddenIp).await;
    run(&feature, InternetPrivacyAction::VpnPromptResult { granted: true }).await;

    assert_eq!(feature.state().mode, InternetPrivacyMode::HideIp);
    let events = events.drain();
    assert_eq!(events.len(), 2);
    assert_eq!(events[1], InternetPrivacyEvent::HiddenIpSelected);
    assert_eq!(modules.ip_scrambler.current(), IpScramblerStatus::On);
}

#[tokio::test]
async fn denied_consent_reports_error() {
    let modules = common::modules();
    let feature = feature(&modules);
    let mut events = feature.single_events().unwrap();

    run(&feature, InternetPrivacyAction::UseHiddenIp).await;
    events.drain();
    run(&feature, InternetPrivacyAction::VpnPromptResult { granted: false }).await;

    assert_eq!(
        events.drain(),
        vec![InternetPrivacyEvent::Error("VPN permission denied".to_string())]
    );
    assert_eq!(feature.state().mode, InternetPrivacyMode::RealIp);
}

#[tokio::test]
async fn consent_is_only_asked_once() {
    let modules = common::modules();
    let feature = feature(&modules);
    let mut events = feature.single_events().unwrap();

    run(&feature, InternetPrivacyAction::UseHiddenIp).await;
    run(&feature, InternetPrivacyAction::VpnPromptResult { granted: true }).await;
    run(&feature, InternetPrivacyAction::UseRealIp).await;
    events.drain();

    run(&feature, InternetPrivacyAction::UseHiddenIp).await;
    assert_eq!(events.drain(), vec![InternetPrivacyEvent::HiddenIpSelected]);
    assert_eq!(feature.state().mode, InternetPrivacyMode::HideIp);
}

#[tokio::test]
async fn hiding_without_consent_requirement_starts_directly() {
    let mut config = common::config();
    config.fixtures.require_vpn_consent = false;
    let modules = MemoryModules::from_config(&config);
    let feature = feature(&modules);
    let mut events = feature.single_events().unwrap();

    run(&feature, InternetPrivacyAction::UseHiddenIp).await;

    assert_eq!(feature.state().mode, InternetPrivacyMode::HideIp);
    assert_eq!(events.drain(), vec![InternetPrivacyEvent::HiddenIpSelected]);
}

#[tokio::test]
async fn hiding_twice_is_a_no_op() {
    let mut config = common::config();
    config.fixtures.require_vpn_consent = false;
    let modules = MemoryModules::from_config(&config);
    let feature = feature(&modules);
    let mut events = feature.single_events().unwrap();

    run(&feature, InternetPrivacyAction::UseHiddenIp).await;
    events.drain();
    run(&feature, InternetPrivacyAction::UseHiddenIp).await;

    assert!(events.drain().is_empty());
    assert_eq!(feature.state().mode, InternetPrivacyMode::HideIp);
}

#[tokio::test]
async fn real_ip_from_real_ip_does_nothing() {
    let modules = common::modules();
    let feature = feature(&modules);
    let mut events = feature.single_events().unwrap();

    run(&feature, InternetPrivacyAction::UseRealIp).await;

    assert!(events.drain().is_empty());
    assert_eq!(feature.state(), InternetPrivacyState::default());
}

#[tokio::test]
async fn module_failure_becomes_error_event() {
    let modules = common::modules();
    let feature = feature(&modules);
    let mut events = feature.single_events().unwrap();

    modules.ip_scrambler.failures().fail_next(ModuleError::Unavailable {
        module: "ip_scrambler",
    });
    run(&feature, InternetPrivacyAction::UseHiddenIp).await;

    assert_eq!(
        events.drain(),
        vec![InternetPrivacyEvent::Error("Can't hide IP".to_string())]
    );
    assert_eq!(feature.state().mode, InternetPrivacyMode::RealIp);
}

#[tokio::test]
async fn load_reads_current_status() {
    let modules = common::modules();
    modules.ip_scrambler.push_status(IpScramblerStatus::On);
    let feature = feature(&modules);

    run(&feature, InternetPrivacyAction::LoadInternetMode).await;

    assert_eq!(feature.state().mode, InternetPrivacyMode::HideIp);
}

#[tokio::test]
async fn status_listener_drives_mode() {
    let modules = common::modules();
    let feature = feature(&modules);
    feature.add_external_actions(internet_privacy::status_actions(
        modules.ip_scrambler.as_ref(),
    ));
    assert!(feature.is_active());

    modules.ip_scrambler.push_status(IpScramblerStatus::Stopping);
    within(async {
        while feature.state().mode != InternetPrivacyMode::RealIpLoading {
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }
    })
    .await;

    modules.ip_scrambler.push_status(IpScramblerStatus::Starting);
    within(async {
        while feature.state().mode != InternetPrivacyMode::HideIpLoading {
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }
    })
    .await;
}
