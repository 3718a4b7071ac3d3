//! Hardcoded data standing in for a backend. Anything time-relative is built
//! from the `now` passed in.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::models::*;

pub const BLOOD_GROUPS: [&str; 8] = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

pub const GENDERS: [&str; 3] = ["male", "female", "other"];

pub const INDIAN_STATES: [&str; 9] = [
    "Kerala",
    "Tamil Nadu",
    "Karnataka",
    "Andhra Pradesh",
    "West Bengal",
    "Bihar",
    "Odisha",
    "Jharkhand",
    "Uttar Pradesh",
];

pub const COMMON_CONDITIONS: [&str; 5] = ["Diabetes", "Hypertension", "Heart Disease", "Asthma", "Arthritis"];

/// State the registering worker currently lives in
pub const DEFAULT_CURRENT_STATE: &str = "Kerala";

pub const STARTING_POINTS: u32 = 1250;
pub const STARTING_LEVEL: u32 = 3;

pub const HEALTH_SCORE: u16 = 78;
pub const RISK_LEVEL: &str = "Low";

pub const USER_LOCATION: &str = "Kochi, Kerala";

/// Phone number behind the services hub support button
pub const SUPPORT_NUMBER: &str = "1800-AROGYA";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

pub fn languages() -> Vec<Language> {
    vec![
        Language { code: "en", name: "English", native_name: "English" },
        Language { code: "hi", name: "Hindi", native_name: "हिंदी" },
        Language { code: "bn", name: "Bengali", native_name: "বাংলা" },
        Language { code: "ta", name: "Tamil", native_name: "தமிழ்" },
        Language { code: "or", name: "Odia", native_name: "ଓଡ଼ିଆ" },
        Language { code: "ml", name: "Malayalam", native_name: "മലയാളം" },
    ]
}

pub fn welcome_features() -> Vec<Feature> {
    vec![
        Feature {
            title: "Personal Health Records",
            description: "Secure digital storage of your medical history",
        },
        Feature {
            title: "Privacy Protected",
            description: "Your data is safe and fully under your control",
        },
        Feature {
            title: "Family Health",
            description: "Manage health records for your entire family",
        },
        Feature {
            title: "Multilingual Support",
            description: "Available in your preferred language",
        },
    ]
}

// Dashboard

pub fn dashboard_stats() -> Vec<HealthStat> {
    vec![
        HealthStat { label: "Blood Pressure", value: "120/80", status: "normal" },
        HealthStat { label: "Blood Sugar", value: "95 mg/dL", status: "normal" },
        HealthStat { label: "Last Checkup", value: "2 weeks ago", status: "recent" },
        HealthStat { label: "Medications", value: "2 active", status: "active" },
    ]
}

pub fn recent_activity() -> Vec<RecentActivity> {
    vec![
        RecentActivity {
            kind: "checkup",
            title: "General Health Checkup",
            date: "2 weeks ago",
            provider: "Community Health Center",
        },
        RecentActivity {
            kind: "medication",
            title: "Blood Pressure Medication",
            date: "1 month ago",
            provider: "Dr. Sharma",
        },
        RecentActivity {
            kind: "vaccination",
            title: "COVID-19 Booster",
            date: "3 months ago",
            provider: "Vaccination Center",
        },
    ]
}

// Health tracking

pub fn health_records(now: DateTime<Utc>) -> Vec<HealthRecord> {
    let reading = |id: &str, kind: HealthRecordType, value: &str, hours_ago: i64, notes: Option<&str>, status| {
        HealthRecord {
            id: id.to_string(),
            kind,
            value: value.to_string(),
            unit: kind.unit().to_string(),
            notes: notes.map(str::to_string),
            timestamp: now - Duration::hours(hours_ago),
            status: Some(status),
        }
    };

    vec![
        reading("1", HealthRecordType::BloodPressure, "120/80", 2, None, ReadingStatus::Normal),
        reading("2", HealthRecordType::BloodSugar, "95", 5, Some("Fasting glucose"), ReadingStatus::Normal),
        reading("3", HealthRecordType::Weight, "68", 24, None, ReadingStatus::Normal),
        reading("4", HealthRecordType::BloodPressure, "135/85", 48, None, ReadingStatus::Warning),
    ]
}

pub fn medications(now: DateTime<Utc>) -> Vec<Medication> {
    vec![
        Medication {
            id: "1".to_string(),
            name: "Amlodipine".to_string(),
            dosage: "5mg".to_string(),
            frequency: "Once daily".to_string(),
            time_to_take: "09:00".to_string(),
            last_taken: now - Duration::hours(2),
            next_due: now + Duration::hours(22),
            taken: true,
        },
        Medication {
            id: "2".to_string(),
            name: "Metformin".to_string(),
            dosage: "500mg".to_string(),
            frequency: "Twice daily".to_string(),
            time_to_take: "08:00, 20:00".to_string(),
            last_taken: now - Duration::hours(10),
            next_due: now + Duration::hours(2),
            taken: false,
        },
    ]
}

// Medical records

pub fn medical_records(now: DateTime<Utc>) -> Vec<MedicalRecord> {
    vec![
        MedicalRecord {
            id: "1".to_string(),
            kind: MedicalRecordType::Consultation,
            title: "General Health Checkup".to_string(),
            provider: "Dr. Priya Sharma, MBBS".to_string(),
            date: now - Duration::days(7),
            location: "Community Health Center, Kochi".to_string(),
            description: "Routine health checkup. Blood pressure slightly elevated. Recommended dietary changes and regular exercise.".to_string(),
            attachments: vec![],
            status: RecordStatus::Completed,
            tags: owned(&["routine", "hypertension", "preventive"]),
        },
        MedicalRecord {
            id: "2".to_string(),
            kind: MedicalRecordType::Prescription,
            title: "Hypertension Medication".to_string(),
            provider: "Dr. Priya Sharma, MBBS".to_string(),
            date: now - Duration::days(7),
            location: "Community Health Center, Kochi".to_string(),
            description: "Amlodipine 5mg once daily. Take in the morning with food. Monitor blood pressure weekly.".to_string(),
            attachments: vec![],
            status: RecordStatus::Active,
            tags: owned(&["medication", "hypertension"]),
        },
        MedicalRecord {
            id: "3".to_string(),
            kind: MedicalRecordType::LabResult,
            title: "Complete Blood Count".to_string(),
            provider: "MedLab Diagnostics".to_string(),
            date: now - Duration::days(14),
            location: "MedLab, Ernakulam".to_string(),
            description: "All parameters within normal range. Hemoglobin: 13.2 g/dL, WBC: 7200/μL, Platelets: 280,000/μL".to_string(),
            attachments: vec![],
            status: RecordStatus::Completed,
            tags: owned(&["blood_test", "normal"]),
        },
        MedicalRecord {
            id: "4".to_string(),
            kind: MedicalRecordType::Vaccination,
            title: "COVID-19 Booster Shot".to_string(),
            provider: "Kerala State Vaccination Center".to_string(),
            date: now - Duration::days(90),
            location: "Primary Health Center, Thrissur".to_string(),
            description: "Covishield booster dose administered. No adverse reactions reported.".to_string(),
            attachments: vec![],
            status: RecordStatus::Completed,
            tags: owned(&["vaccination", "covid19", "booster"]),
        },
    ]
}

// Family

pub fn family_members(now: DateTime<Utc>) -> Vec<FamilyMember> {
    vec![
        FamilyMember {
            id: "1".to_string(),
            name: "प्रिया Kumar".to_string(),
            relationship: "Spouse".to_string(),
            age: 26,
            gender: "female".to_string(),
            blood_group: Some("A+".to_string()),
            emergency_contact: Some("+91 98765 43210".to_string()),
            allergies: owned(&["Dust", "Pollen"]),
            chronic_conditions: owned(&["Asthma"]),
            last_checkup: Some(now - Duration::days(45)),
            health_status: HealthStatus::Monitoring,
        },
        FamilyMember {
            id: "2".to_string(),
            name: "आर्यन Kumar".to_string(),
            relationship: "Son".to_string(),
            age: 3,
            gender: "male".to_string(),
            blood_group: Some("O+".to_string()),
            emergency_contact: None,
            allergies: vec![],
            chronic_conditions: vec![],
            last_checkup: Some(now - Duration::days(30)),
            health_status: HealthStatus::Good,
        },
        FamilyMember {
            id: "3".to_string(),
            name: "राज Kumar Sr.".to_string(),
            relationship: "Father".to_string(),
            age: 58,
            gender: "male".to_string(),
            blood_group: Some("O+".to_string()),
            emergency_contact: Some("+91 87654 32109".to_string()),
            allergies: vec![],
            chronic_conditions: owned(&["Diabetes", "Hypertension"]),
            last_checkup: Some(now - Duration::days(90)),
            health_status: HealthStatus::NeedsAttention,
        },
    ]
}

// Emergency

pub fn emergency_profile() -> EmergencyProfile {
    EmergencyProfile {
        name: "राज Kumar",
        age: 28,
        gender: "Male",
        blood_group: "O+",
        health_id: "AHS-789456",
        phone: "+91 98765 43210",
        current_address: "Room 12, Workers Quarters, Industrial Area, Kochi, Kerala 682030",
        emergency_contacts: vec![
            EmergencyContact {
                name: "प्रिया Kumar",
                relationship: "Spouse",
                phone: "+91 98765 43211",
                is_primary: true,
            },
            EmergencyContact {
                name: "राज Kumar Sr.",
                relationship: "Father",
                phone: "+91 87654 32109",
                is_primary: false,
            },
        ],
        allergies: vec!["Penicillin", "Dust"],
        chronic_conditions: vec!["Hypertension"],
        current_medications: vec!["Amlodipine 5mg - Once daily"],
        insurance_status: "Currently Ineligible",
        preferred_language: "Hindi",
    }
}

pub fn nearby_facilities() -> Vec<Facility> {
    vec![
        Facility {
            name: "Government General Hospital",
            kind: "Public Hospital",
            distance: "2.3 km",
            phone: "+91 484 2361234",
            emergency: true,
            address: "Ernakulam, Kochi",
        },
        Facility {
            name: "Community Health Center",
            kind: "Primary Health Center",
            distance: "0.8 km",
            phone: "+91 484 2345678",
            emergency: false,
            address: "Industrial Area, Kochi",
        },
        Facility {
            name: "MedPlus Pharmacy",
            kind: "Pharmacy",
            distance: "0.5 km",
            phone: "+91 484 2987654",
            emergency: false,
            address: "Main Road, Kochi",
        },
    ]
}

pub fn emergency_numbers() -> Vec<EmergencyNumber> {
    vec![
        EmergencyNumber { service: "Ambulance", number: "108", description: "Free emergency medical service" },
        EmergencyNumber { service: "Police", number: "100", description: "Emergency police assistance" },
        EmergencyNumber { service: "Fire Service", number: "101", description: "Fire emergency service" },
        EmergencyNumber { service: "Women Helpline", number: "1091", description: "24x7 women in distress" },
        EmergencyNumber { service: "Disaster Management", number: "1070", description: "Natural disaster helpline" },
    ]
}

/// Profile used when onboarding is skipped
pub fn demo_user(now: DateTime<Utc>) -> UserData {
    let profile = emergency_profile();
    UserData {
        name: profile.name.to_string(),
        age: profile.age.to_string(),
        gender: "male".to_string(),
        blood_group: profile.blood_group.to_string(),
        phone: profile.phone.to_string(),
        emergency_contact: profile
            .primary_contact()
            .map(|c| c.phone.to_string())
            .unwrap_or_default(),
        current_address: profile.current_address.to_string(),
        home_state: "Bihar".to_string(),
        current_state: DEFAULT_CURRENT_STATE.to_string(),
        allergies: profile.allergies.join(", "),
        chronic_conditions: profile.chronic_conditions.iter().map(|c| c.to_string()).collect(),
        medications: profile.current_medications.join(", "),
        insurance_status: InsuranceStatus::Ineligible,
        abha_number: None,
        aadhaar_number: None,
        data_sharing: false,
        health_worker_access: true,
        health_id: profile.health_id.to_string(),
        registration_type: RegistrationType::Provisional,
        registration_date: now,
    }
}

// Services

pub fn service_categories() -> Vec<ServiceCategory> {
    let available = |name, link| ServiceItem { name, status: ServiceStatus::Available, link };

    vec![
        ServiceCategory {
            category: "Financial Services",
            items: vec![
                available("Health Insurance Claims", "#"),
                available("Medical Loan Assistance", "#"),
                available("Digital Payments for Healthcare", "#"),
                ServiceItem { name: "Emergency Fund Access", status: ServiceStatus::ComingSoon, link: "#" },
            ],
        },
        ServiceCategory {
            category: "Employment",
            items: vec![
                available("Health-Safe Job Listings", "#"),
                available("Workplace Safety Reports", "#"),
                available("Skill Development Programs", "#"),
                available("Labor Rights Information", "#"),
            ],
        },
        ServiceCategory {
            category: "Legal Aid",
            items: vec![
                available("Healthcare Rights Helpline", "tel:1800-123-4567"),
                available("Legal Document Assistance", "#"),
                available("Immigration Support", "#"),
                available("Free Legal Consultation", "#"),
            ],
        },
    ]
}

pub fn service_quick_actions() -> Vec<ServiceItem> {
    vec![
        ServiceItem { name: "Find Nearby ATM", status: ServiceStatus::Available, link: "#" },
        ServiceItem { name: "Emergency Helpline", status: ServiceStatus::Available, link: "tel:108" },
        ServiceItem { name: "Government Schemes", status: ServiceStatus::Available, link: "#" },
    ]
}

// AI guidance

pub fn recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation {
            kind: "clinic",
            priority: Priority::High,
            title: "Blood Pressure Check Recommended",
            description: "Based on your recent readings, we recommend a check-up within 3 days",
            action: "Find Nearby Clinic",
            location: Some("Primary Health Center, Ernakulam - 1.2 km away"),
        },
        Recommendation {
            kind: "medication",
            priority: Priority::Medium,
            title: "Medication Reminder",
            description: "Your diabetes medication schedule suggests an evening dose",
            action: "Set Reminder",
            location: None,
        },
        Recommendation {
            kind: "lifestyle",
            priority: Priority::Low,
            title: "Health Goal Progress",
            description: "You're 80% towards your weekly walking goal. Just 2km more!",
            action: "Track Activity",
            location: None,
        },
        Recommendation {
            kind: "alert",
            priority: Priority::High,
            title: "Weather Health Alert",
            description: "High pollution levels detected in your area. Consider wearing a mask",
            action: "View Details",
            location: Some(USER_LOCATION),
        },
    ]
}

pub fn insights() -> Vec<Insight> {
    vec![
        Insight {
            title: "Health Trend Analysis",
            value: "Improving",
            description: "Your blood pressure readings show a 15% improvement over the last month",
            trend: Trend::Up,
        },
        Insight {
            title: "Risk Assessment",
            value: "Low Risk",
            description: "Based on your current health data and lifestyle factors",
            trend: Trend::Stable,
        },
        Insight {
            title: "Medication Adherence",
            value: "92%",
            description: "Excellent adherence to your prescribed medication schedule",
            trend: Trend::Up,
        },
    ]
}

// Rewards

pub fn achievements() -> Vec<Achievement> {
    vec![
        Achievement {
            id: 1,
            title: "Health Tracker Hero".to_string(),
            description: "Log health data for 7 consecutive days".to_string(),
            points: 100,
            completed: true,
            progress: None,
            date: Some(date(2024, 1, 15)),
        },
        Achievement {
            id: 2,
            title: "Medication Master".to_string(),
            description: "100% medication adherence for a month".to_string(),
            points: 200,
            completed: true,
            progress: None,
            date: Some(date(2024, 1, 10)),
        },
        Achievement {
            id: 3,
            title: "Community Helper".to_string(),
            description: "Help 5 fellow users in the community forum".to_string(),
            points: 150,
            completed: false,
            progress: Some(60),
            date: None,
        },
    ]
}

pub fn challenges() -> Vec<Challenge> {
    vec![
        Challenge {
            title: "Weekly Health Check".to_string(),
            description: "Complete your weekly vital signs tracking".to_string(),
            points: 50,
            time_left: "3 days".to_string(),
            progress: 70,
            kind: ChallengeKind::Weekly,
        },
        Challenge {
            title: "Hydration Hero".to_string(),
            description: "Log 8 glasses of water daily for a week".to_string(),
            points: 75,
            time_left: "5 days".to_string(),
            progress: 40,
            kind: ChallengeKind::Daily,
        },
        Challenge {
            title: "Knowledge Quest".to_string(),
            description: "Complete 3 health education quizzes".to_string(),
            points: 100,
            time_left: "1 week".to_string(),
            progress: 33,
            kind: ChallengeKind::Learning,
        },
    ]
}

pub fn rewards() -> Vec<Reward> {
    let reward = |name: &str, points, available, kind| Reward {
        name: name.to_string(),
        points,
        available,
        kind,
    };

    vec![
        reward("Free Data Pack (1GB)", 500, true, RewardKind::Data),
        reward("Medicine Discount (10%)", 750, true, RewardKind::Discount),
        reward("Telemedicine Consultation", 1000, true, RewardKind::Health),
        reward("Premium Health Report", 1500, false, RewardKind::Premium),
    ]
}

// Community

pub fn community_posts() -> Vec<CommunityPost> {
    vec![
        CommunityPost {
            id: 1,
            author: "Anonymous User".to_string(),
            state: "Kerala".to_string(),
            content: "Can anyone recommend a good clinic near Ernakulam for diabetes check-up? Looking for affordable options.".to_string(),
            category: "Healthcare".to_string(),
            likes: 12,
            replies: 5,
            time_ago: "2 hours ago".to_string(),
            is_helpful: true,
        },
        CommunityPost {
            id: 2,
            author: "Health Helper".to_string(),
            state: "Tamil Nadu".to_string(),
            content: "Just wanted to share that the mobile health camp will be visiting our area next week. Free check-ups for blood pressure and diabetes!".to_string(),
            category: "Health News".to_string(),
            likes: 25,
            replies: 8,
            time_ago: "4 hours ago".to_string(),
            is_helpful: false,
        },
        CommunityPost {
            id: 3,
            author: "Migrant Worker".to_string(),
            state: "Karnataka".to_string(),
            content: "Has anyone faced issues with insurance claims? Need advice on the documentation required.".to_string(),
            category: "Insurance".to_string(),
            likes: 7,
            replies: 3,
            time_ago: "1 day ago".to_string(),
            is_helpful: true,
        },
    ]
}

pub fn community_stats() -> Vec<CommunityStat> {
    vec![
        CommunityStat { label: "Active Members", value: "2,847" },
        CommunityStat { label: "Posts This Week", value: "156" },
        CommunityStat { label: "Questions Answered", value: "89" },
        CommunityStat { label: "Helpful Responses", value: "234" },
    ]
}

pub fn peer_support() -> Vec<SupportResource> {
    vec![
        SupportResource { title: "Daily Support Group", subtitle: "Join daily at 7 PM" },
        SupportResource { title: "Crisis Helpline", subtitle: "24/7 emotional support" },
        SupportResource { title: "Health Mentors", subtitle: "Get guidance on health management" },
        SupportResource { title: "Workplace Wellness", subtitle: "Tips for staying healthy at work" },
    ]
}

pub fn shared_resources() -> Vec<SupportResource> {
    vec![
        SupportResource { title: "Home Remedies Guide", subtitle: "Traditional remedies from various cultures" },
        SupportResource { title: "Emergency Contact List", subtitle: "Important numbers by location" },
        SupportResource { title: "Clinic Reviews", subtitle: "Community-rated healthcare providers" },
        SupportResource { title: "Diabetes Management Success", subtitle: "How I controlled my blood sugar" },
        SupportResource { title: "Mental Health Recovery", subtitle: "Finding support in community" },
    ]
}

// Telemedicine

pub fn doctors() -> Vec<Doctor> {
    vec![
        Doctor {
            id: 1,
            name: "Dr. Priya Sharma",
            specialization: "General Medicine",
            languages: &["Hindi", "English", "Bengali"],
            rating: 4.8,
            experience: "8 years",
            available_slots: &["10:00 AM", "2:00 PM", "4:00 PM"],
            consultation_fee: 250,
            next_available: "Today",
        },
        Doctor {
            id: 2,
            name: "Dr. Rajesh Kumar",
            specialization: "Diabetes & Endocrinology",
            languages: &["Hindi", "English", "Tamil"],
            rating: 4.9,
            experience: "12 years",
            available_slots: &["11:00 AM", "3:00 PM", "5:00 PM"],
            consultation_fee: 400,
            next_available: "Tomorrow",
        },
        Doctor {
            id: 3,
            name: "Dr. Anjali Menon",
            specialization: "Mental Health",
            languages: &["Malayalam", "English", "Hindi"],
            rating: 4.7,
            experience: "6 years",
            available_slots: &["9:00 AM", "1:00 PM", "6:00 PM"],
            consultation_fee: 300,
            next_available: "Today",
        },
    ]
}

pub fn upcoming_consultations() -> Vec<Consultation> {
    vec![
        Consultation {
            id: 1,
            doctor_name: "Dr. Priya Sharma",
            kind: "Follow-up",
            date: "Today",
            time: "2:00 PM",
            duration: "15 mins",
            status: "Confirmed",
        },
        Consultation {
            id: 2,
            doctor_name: "Dr. Rajesh Kumar",
            kind: "Diabetes Check",
            date: "Tomorrow",
            time: "3:00 PM",
            duration: "30 mins",
            status: "Confirmed",
        },
    ]
}

pub fn consultation_history() -> Vec<ConsultationRecord> {
    vec![
        ConsultationRecord {
            id: 1,
            doctor_name: "Dr. Priya Sharma",
            date: "2024-01-10",
            diagnosis: "Common Cold",
            prescription: "Rest, fluids, paracetamol",
            rating: 5,
        },
        ConsultationRecord {
            id: 2,
            doctor_name: "Dr. Rajesh Kumar",
            date: "2024-01-05",
            diagnosis: "Diabetes Management",
            prescription: "Metformin 500mg, dietary changes",
            rating: 5,
        },
    ]
}

// Analytics

pub fn predictions() -> Vec<Prediction> {
    vec![
        Prediction {
            condition: "Hypertension Risk",
            probability: 35,
            trend: Trend::Up,
            recommendation: "Monitor blood pressure daily and reduce salt intake",
            priority: Priority::Medium,
        },
        Prediction {
            condition: "Diabetes Risk",
            probability: 15,
            trend: Trend::Stable,
            recommendation: "Continue current diet and exercise routine",
            priority: Priority::Low,
        },
        Prediction {
            condition: "Mental Health Alert",
            probability: 60,
            trend: Trend::Up,
            recommendation: "Consider stress management techniques or counseling",
            priority: Priority::High,
        },
    ]
}

pub fn vital_trends() -> Vec<VitalTrend> {
    vec![
        VitalTrend { date: "Jan 1", bp_systolic: 120, bp_diastolic: 80, heart_rate: 72, weight: 70.0 },
        VitalTrend { date: "Jan 8", bp_systolic: 125, bp_diastolic: 82, heart_rate: 75, weight: 69.5 },
        VitalTrend { date: "Jan 15", bp_systolic: 128, bp_diastolic: 85, heart_rate: 78, weight: 69.8 },
        VitalTrend { date: "Jan 22", bp_systolic: 130, bp_diastolic: 88, heart_rate: 80, weight: 70.2 },
        VitalTrend { date: "Jan 29", bp_systolic: 132, bp_diastolic: 90, heart_rate: 82, weight: 70.5 },
    ]
}

pub fn health_metrics() -> Vec<HealthMetric> {
    vec![
        HealthMetric { name: "Sleep Quality", score: 85, trend: Trend::Up, change: "+5%", target: 90 },
        HealthMetric { name: "Physical Activity", score: 70, trend: Trend::Up, change: "+12%", target: 85 },
        HealthMetric { name: "Nutrition Score", score: 60, trend: Trend::Down, change: "-3%", target: 80 },
        HealthMetric { name: "Stress Level", score: 45, trend: Trend::Down, change: "-8%", target: 30 },
    ]
}

pub fn risk_factors() -> Vec<RiskFactor> {
    vec![
        RiskFactor { name: "Sedentary Lifestyle", value: 30 },
        RiskFactor { name: "Poor Diet", value: 25 },
        RiskFactor { name: "Stress", value: 20 },
        RiskFactor { name: "Sleep Issues", value: 15 },
        RiskFactor { name: "Other", value: 10 },
    ]
}

// Community reporting

pub fn community_reports() -> Vec<CommunityReport> {
    vec![
        CommunityReport {
            id: 1,
            kind: ReportType::Outbreak,
            title: "Flu Cases Increasing".to_string(),
            location: "Industrial Area, Kochi".to_string(),
            description: "Multiple workers reporting flu symptoms in dormitory".to_string(),
            status: ReportStatus::Investigating,
            severity: Severity::Medium,
            reported_by: "Anonymous".to_string(),
            date: date(2024, 1, 15),
            upvotes: 12,
        },
        CommunityReport {
            id: 2,
            kind: ReportType::WaterQuality,
            title: "Water Contamination".to_string(),
            location: "Worker Colony, Ernakulam".to_string(),
            description: "Water supply appears cloudy and has unusual taste".to_string(),
            status: ReportStatus::Resolved,
            severity: Severity::High,
            reported_by: "Community Member".to_string(),
            date: date(2024, 1, 14),
            upvotes: 25,
        },
        CommunityReport {
            id: 3,
            kind: ReportType::Facility,
            title: "Clinic Closure".to_string(),
            location: "Primary Health Center, Aluva".to_string(),
            description: "Local clinic has been closed for maintenance since last week".to_string(),
            status: ReportStatus::Confirmed,
            severity: Severity::Low,
            reported_by: "Health Worker".to_string(),
            date: date(2024, 1, 12),
            upvotes: 8,
        },
    ]
}

pub fn health_alerts() -> Vec<HealthAlert> {
    vec![
        HealthAlert {
            title: "Monsoon Health Advisory",
            description: "Increased risk of waterborne diseases. Ensure water purification.",
            severity: Severity::Medium,
            date: date(2024, 1, 15),
            area: "Coastal Areas",
        },
        HealthAlert {
            title: "Air Quality Alert",
            description: "Poor air quality due to industrial emissions. Use masks outdoors.",
            severity: Severity::High,
            date: date(2024, 1, 14),
            area: "Industrial Districts",
        },
    ]
}

// Voice

pub const DEFAULT_VOICE_LANGUAGE: &str = "hindi";

/// Transcript the fake recognizer "hears"
pub const SIMULATED_TRANSCRIPT: &str = "मेरा ब्लड प्रेशर रिकॉर्ड करें";

pub fn voice_languages() -> Vec<VoiceLanguage> {
    vec![
        VoiceLanguage { code: "hindi", name: "हिंदी (Hindi)", voice: "Aditi" },
        VoiceLanguage { code: "bengali", name: "বাংলা (Bengali)", voice: "Ruma" },
        VoiceLanguage { code: "tamil", name: "தமிழ் (Tamil)", voice: "Raveena" },
        VoiceLanguage { code: "malayalam", name: "മലയാളം (Malayalam)", voice: "Madhur" },
        VoiceLanguage { code: "english", name: "English", voice: "Joanna" },
        VoiceLanguage { code: "odia", name: "ଓଡ଼ିଆ (Odia)", voice: "Default" },
    ]
}

pub fn voice_commands() -> Vec<VoiceCommand> {
    vec![
        VoiceCommand { command: "मेरा स्वास्थ्य कार्ड दिखाएं", english: "Show my health card", category: "Health Records" },
        VoiceCommand { command: "दवा का समय याद दिलाएं", english: "Remind me to take medicine", category: "Medication" },
        VoiceCommand { command: "नजदीकी अस्पताल ढूंढें", english: "Find nearby hospital", category: "Emergency" },
        VoiceCommand { command: "डॉक्टर से बात करवाएं", english: "Connect with doctor", category: "Telemedicine" },
        VoiceCommand { command: "मेरा ब्लड प्रेशर रिकॉर्ड करें", english: "Record my blood pressure", category: "Health Tracking" },
    ]
}

pub fn conversation_history() -> Vec<ConversationTurn> {
    vec![
        ConversationTurn {
            speaker: Speaker::User,
            text: "मेरा स्वास्थ्य कार्ड दिखाएं",
            translation: "Show my health card",
            time: "2:30 PM",
        },
        ConversationTurn {
            speaker: Speaker::Assistant,
            text: "आपका स्वास्थ्य कार्ड तैयार है। क्या आप इसे साझा करना चाहते हैं?",
            translation: "Your health card is ready. Would you like to share it?",
            time: "2:30 PM",
        },
        ConversationTurn {
            speaker: Speaker::User,
            text: "हाँ, कृपया भेजें",
            translation: "Yes, please send",
            time: "2:31 PM",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_unique_within_lists() {
        let now = Utc::now();
        let record_ids: HashSet<_> = medical_records(now).into_iter().map(|r| r.id).collect();
        assert_eq!(record_ids.len(), 4);

        let post_ids: HashSet<_> = community_posts().into_iter().map(|p| p.id).collect();
        assert_eq!(post_ids.len(), 3);

        let member_ids: HashSet<_> = family_members(now).into_iter().map(|m| m.id).collect();
        assert_eq!(member_ids.len(), 3);
    }

    #[test]
    fn test_relative_fixtures_follow_now() {
        let now = Utc::now();
        let records = health_records(now);
        assert_eq!(records[0].timestamp, now - Duration::hours(2));
        assert_eq!(records[3].status, Some(ReadingStatus::Warning));
    }

    #[test]
    fn test_risk_factors_sum_to_hundred() {
        let total: u32 = risk_factors().iter().map(|r| r.value as u32).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_demo_user_matches_emergency_profile() {
        let user = demo_user(Utc::now());
        assert_eq!(user.health_id, "AHS-789456");
        assert_eq!(user.emergency_contact, "+91 98765 43211");
        assert_eq!(user.current_state, DEFAULT_CURRENT_STATE);
    }
}
