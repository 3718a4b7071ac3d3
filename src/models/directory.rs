//! Contacts, facilities, services and doctors shown across the care screens.
//! These are display-only fixtures, so they borrow static text.

#[derive(Debug, Clone, PartialEq)]
pub struct EmergencyContact {
    pub name: &'static str,
    pub relationship: &'static str,
    pub phone: &'static str,
    pub is_primary: bool,
}

/// Profile shown on the emergency screen
#[derive(Debug, Clone, PartialEq)]
pub struct EmergencyProfile {
    pub name: &'static str,
    pub age: u8,
    pub gender: &'static str,
    pub blood_group: &'static str,
    pub health_id: &'static str,
    pub phone: &'static str,
    pub current_address: &'static str,
    pub emergency_contacts: Vec<EmergencyContact>,
    pub allergies: Vec<&'static str>,
    pub chronic_conditions: Vec<&'static str>,
    pub current_medications: Vec<&'static str>,
    pub insurance_status: &'static str,
    pub preferred_language: &'static str,
}

impl EmergencyProfile {
    pub fn primary_contact(&self) -> Option<&EmergencyContact> {
        self.emergency_contacts.first()
    }

    /// Plain-text card shared with first responders
    pub fn share_text(&self) -> String {
        format!(
            "EMERGENCY CONTACT INFO\nName: {}\nHealth ID: {}\nBlood Group: {}\nEmergency Contact: {}\nAllergies: {}\nLocation: {}",
            self.name,
            self.health_id,
            self.blood_group,
            self.primary_contact().map(|c| c.phone).unwrap_or(""),
            self.allergies.join(", "),
            self.current_address,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Facility {
    pub name: &'static str,
    pub kind: &'static str,
    pub distance: &'static str,
    pub phone: &'static str,
    pub emergency: bool,
    pub address: &'static str,
}

/// National helpline
#[derive(Debug, Clone, PartialEq)]
pub struct EmergencyNumber {
    pub service: &'static str,
    pub number: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStatus {
    Available,
    ComingSoon,
}

impl ServiceStatus {
    pub fn label(self) -> &'static str {
        match self {
            ServiceStatus::Available => "Available",
            ServiceStatus::ComingSoon => "Coming Soon",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceItem {
    pub name: &'static str,
    pub status: ServiceStatus,
    pub link: &'static str,
}

impl ServiceItem {
    /// Phone number behind a `tel:` link
    pub fn phone_number(&self) -> Option<&'static str> {
        self.link.strip_prefix("tel:")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCategory {
    pub category: &'static str,
    pub items: Vec<ServiceItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Doctor {
    pub id: u32,
    pub name: &'static str,
    pub specialization: &'static str,
    pub languages: &'static [&'static str],
    pub rating: f32,
    pub experience: &'static str,
    pub available_slots: &'static [&'static str],
    pub consultation_fee: u32,
    pub next_available: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Consultation {
    pub id: u32,
    pub doctor_name: &'static str,
    pub kind: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub duration: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConsultationRecord {
    pub id: u32,
    pub doctor_name: &'static str,
    pub date: &'static str,
    pub diagnosis: &'static str,
    pub prescription: &'static str,
    pub rating: u8,
}

/// Dashboard headline figure
#[derive(Debug, Clone, PartialEq)]
pub struct HealthStat {
    pub label: &'static str,
    pub value: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecentActivity {
    pub kind: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub provider: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_text_layout() {
        let profile = EmergencyProfile {
            name: "Test",
            age: 30,
            gender: "Male",
            blood_group: "O+",
            health_id: "AHS-1",
            phone: "+91 1",
            current_address: "Kochi",
            emergency_contacts: vec![EmergencyContact {
                name: "Contact",
                relationship: "Spouse",
                phone: "+91 2",
                is_primary: true,
            }],
            allergies: vec!["Penicillin", "Dust"],
            chronic_conditions: vec![],
            current_medications: vec![],
            insurance_status: "Currently Ineligible",
            preferred_language: "Hindi",
        };

        let text = profile.share_text();
        assert!(text.starts_with("EMERGENCY CONTACT INFO\nName: Test\n"));
        assert!(text.contains("Emergency Contact: +91 2"));
        assert!(text.contains("Allergies: Penicillin, Dust"));
        assert!(text.ends_with("Location: Kochi"));
    }

    #[test]
    fn test_service_item_phone_number() {
        let helpline = ServiceItem {
            name: "Healthcare Rights Helpline",
            status: ServiceStatus::Available,
            link: "tel:1800-123-4567",
        };
        let page = ServiceItem { name: "Immigration Support", status: ServiceStatus::Available, link: "#" };

        assert_eq!(helpline.phone_number(), Some("1800-123-4567"));
        assert_eq!(page.phone_number(), None);
    }
}
