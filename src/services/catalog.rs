use crate::models::CareService;

static SERVICES: &[CareService] = &[
    CareService {
        id: "baby-sitting",
        name: "Baby Sitting",
        description: "Trusted caregivers to look after your children at home while you are away.",
        charge_per_hour: 20.0,
    },
    CareService {
        id: "elderly-care",
        name: "Elderly Care",
        description: "Companionship and daily assistance for elderly family members.",
        charge_per_hour: 25.0,
    },
    CareService {
        id: "sick-care",
        name: "Sick People Care",
        description: "Attentive home care for family members who are ill or recovering.",
        charge_per_hour: 30.0,
    },
];

pub fn all() -> &'static [CareService] {
    SERVICES
}

pub fn find(id: &str) -> Option<&'static CareService> {
    SERVICES.iter().find(|s| s.id == id)
}

pub fn total_cost(service: &CareService, duration: f64) -> f64 {
    duration * service.charge_per_hour
}
