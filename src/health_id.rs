//! Health ID assignment at the end of registration

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::models::RegistrationType;

const BASE36: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Prefix of locally generated (provisional) IDs
pub const PROVISIONAL_PREFIX: &str = "AHS";

/// Generate a provisional ID of the form `AHS-<6 digits>-<6 base36 chars>`.
///
/// The digits are the last six of the epoch milliseconds at `now`. No
/// uniqueness check is made.
pub fn generate_health_id<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> String {
    let millis = now.timestamp_millis().rem_euclid(1_000_000);
    let suffix: String = (0..6)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("{}-{:06}-{}", PROVISIONAL_PREFIX, millis, suffix)
}

/// Health ID for a completed registration. ABHA numbers are reused verbatim.
pub fn resolve_health_id<R: Rng + ?Sized>(
    registration_type: RegistrationType,
    abha_number: &str,
    now: DateTime<Utc>,
    rng: &mut R,
) -> String {
    match registration_type {
        RegistrationType::Abha => abha_number.to_string(),
        RegistrationType::Provisional => generate_health_id(now, rng),
    }
}

/// Whether `id` has the provisional shape
pub fn is_provisional_id(id: &str) -> bool {
    let mut parts = id.split('-');
    let (Some(prefix), Some(digits), Some(suffix), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    prefix == PROVISIONAL_PREFIX
        && digits.len() == 6
        && digits.bytes().all(|b| b.is_ascii_digit())
        && suffix.len() == 6
        && suffix.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_generated_id_shape() {
        let now = Utc.timestamp_millis_opt(1_705_312_345_678).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let id = generate_health_id(now, &mut rng);
        assert!(is_provisional_id(&id), "bad id {}", id);
        assert!(id.starts_with("AHS-345678-"));
    }

    #[test]
    fn test_millis_are_zero_padded() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_042).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let id = generate_health_id(now, &mut rng);
        assert!(id.starts_with("AHS-000042-"));
    }

    #[test]
    fn test_same_seed_same_id() {
        let now = Utc::now();
        let a = generate_health_id(now, &mut StdRng::seed_from_u64(42));
        let b = generate_health_id(now, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_abha_number_reused_verbatim() {
        let mut rng = StdRng::seed_from_u64(3);
        let id = resolve_health_id(RegistrationType::Abha, "12-3456-7890-1234", Utc::now(), &mut rng);
        assert_eq!(id, "12-3456-7890-1234");

        // no format validation
        let id = resolve_health_id(RegistrationType::Abha, "", Utc::now(), &mut rng);
        assert_eq!(id, "");
    }

    #[test]
    fn test_is_provisional_id() {
        assert!(is_provisional_id("AHS-123456-AB12CD"));
        assert!(!is_provisional_id("AHS-12345-AB12CD"));
        assert!(!is_provisional_id("AHS-123456-ab12cd"));
        assert!(!is_provisional_id("XYZ-123456-AB12CD"));
        assert!(!is_provisional_id("AHS-123456-AB12CD-1"));
    }
}
