use arogya_sarthi::health_id::is_provisional_id;
use arogya_sarthi::models::RegistrationType;
use arogya_sarthi::ui::screens::registration::{FieldValue, FormField};
use arogya_sarthi::ui::screens::WizardStep;
use pretty_assertions::assert_eq;
use rand::{rngs::StdRng, SeedableRng};
use test_log::test;

use crate::common::test_data::{filled_form, fixed_now};

#[test]
fn test_provisional_ids_have_expected_shape() {
    let form = filled_form(RegistrationType::Provisional);
    for seed in 0..20 {
        let user = form.complete(fixed_now(), &mut StdRng::seed_from_u64(seed));
        assert!(is_provisional_id(&user.health_id), "bad id {}", user.health_id);
        assert_eq!(user.registration_type, RegistrationType::Provisional);
        assert_eq!(user.abha_number, None);
    }
}

#[test]
fn test_abha_number_becomes_health_id_verbatim() {
    let mut form = filled_form(RegistrationType::Abha);
    for abha in ["12-3456-7890-1234", "not even a number", "  padded  "] {
        form.update_field(FormField::AbhaNumber, FieldValue::Text(abha.to_string()));
        let user = form.complete(fixed_now(), &mut StdRng::seed_from_u64(1));
        assert_eq!(user.health_id, abha);
        assert_eq!(user.abha_number.as_deref(), Some(abha));
    }
}

#[test]
fn test_completed_profile_carries_form_and_date() {
    let form = filled_form(RegistrationType::Provisional);
    let user = form.complete(fixed_now(), &mut StdRng::seed_from_u64(5));

    assert_eq!(user.name, "Ravi Kumar");
    assert_eq!(user.home_state, "Bihar");
    assert_eq!(user.current_state, "Kerala");
    assert!(user.health_worker_access);
    assert!(!user.data_sharing);
    assert_eq!(user.registration_date, fixed_now());
}

#[test]
fn test_mismatched_value_is_rejected() {
    let mut form = filled_form(RegistrationType::Provisional);
    let before = form.clone();

    assert!(!form.update_field(FormField::Name, FieldValue::Flag(true)));
    assert!(!form.update_field(FormField::DataSharing, FieldValue::Text("yes".to_string())));
    assert_eq!(form, before);
}

#[test]
fn test_conditions_toggle_membership() {
    let mut form = filled_form(RegistrationType::Provisional);
    form.toggle_condition("Asthma");
    form.toggle_condition("Diabetes");
    form.toggle_condition("Asthma");
    assert_eq!(form.chronic_conditions, vec!["Diabetes".to_string()]);
}

#[test]
fn test_abha_fields_only_for_abha() {
    let provisional = FormField::for_step(WizardStep::RegistrationType, RegistrationType::Provisional);
    let abha = FormField::for_step(WizardStep::RegistrationType, RegistrationType::Abha);

    assert!(!provisional.contains(&FormField::AbhaNumber));
    assert!(abha.contains(&FormField::AbhaNumber));
    assert!(abha.contains(&FormField::AadhaarNumber));
}

#[test]
fn test_steps_run_forward_in_order() {
    let titles: Vec<_> = WizardStep::ALL.iter().map(|s| (s.number(), s.title())).collect();
    assert_eq!(
        titles,
        vec![
            (1, "Registration Type"),
            (2, "Personal Info"),
            (3, "Location"),
            (4, "Health Info"),
            (5, "Privacy"),
        ]
    );
    assert_eq!(WizardStep::Privacy.next(), None);
    assert_eq!(WizardStep::RegistrationType.previous(), None);
}
