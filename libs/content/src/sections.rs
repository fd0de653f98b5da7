#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentSection {
    pub heading: &'static str,
    pub body: &'static str,
}

impl ContentSection {
    pub const fn new(heading: &'static str, body: &'static str) -> Self {
        ContentSection { heading, body }
    }
}

/// Which fixed heading/paragraph sequence a page draws from. Home and city pages share
/// one sequence so both render the same heading set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Shared,
    Cost,
    HowTo,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Shared, Variant::Cost, Variant::HowTo];

    pub fn sections(&self) -> &'static [ContentSection] {
        match self {
            Variant::Shared => SHARED_SECTIONS,
            Variant::Cost => COST_SECTIONS,
            Variant::HowTo => HOWTO_SECTIONS,
        }
    }

    pub fn headings(&self) -> impl Iterator<Item = &'static str> {
        self.sections().iter().map(|s| s.heading)
    }
}

// Bodies may carry `{anchor text}` markers, rendered as links back to the home page.

pub const SHARED_SECTIONS: &[ContentSection] = &[
    ContentSection::new(
        "What Is Woodpecker Damage to Houses?",
        "Woodpecker damage occurs when woodpeckers peck, drill, or create holes in the exterior of a house. This damage commonly affects wood siding, cedar siding, EIFS, and stucco surfaces. Over time, repeated pecking can expose the structure to moisture intrusion and further deterioration.",
    ),
    ContentSection::new(
        "Why Woodpeckers Peck on Houses",
        "Woodpeckers peck on houses for several reasons, including searching for insects, creating nesting cavities, or establishing territory. Soft siding materials and hollow-sounding surfaces often attract repeated pecking behavior.",
    ),
    ContentSection::new(
        "Common Types of Woodpecker Damage",
        "Common types of woodpecker damage include small round holes, larger nesting cavities, clustered peck marks, and surface chipping. Left unaddressed, these openings allow water, pests, and air infiltration.",
    ),
    ContentSection::new(
        "Woodpecker Holes in Wood and Cedar Siding",
        "Woodpecker holes in wood and cedar siding are especially common because these materials are softer and more attractive to birds. Repairing cedar siding requires proper filling, sealing, and color-matching to restore both appearance and protection.",
    ),
    ContentSection::new(
        "Woodpecker Damage to EIFS and Stucco",
        "EIFS and stucco are also frequent targets for woodpeckers. Damage to these systems often involves punctures or cavities that require specialized EIFS patching and sealing techniques to prevent moisture damage.",
    ),
    ContentSection::new(
        "Professional Woodpecker Damage Repair vs DIY",
        "DIY woodpecker hole repair may seem straightforward, but improper filling or sealing can trap moisture or fail to stop repeat damage. Professional repair focuses on restoring the surface correctly while addressing underlying vulnerabilities.",
    ),
    ContentSection::new(
        "When to Hire a Woodpecker Damage Repair Service",
        "Hiring a professional is recommended when damage affects siding integrity, involves EIFS or stucco systems, or when repeated woodpecker activity continues despite temporary fixes.",
    ),
];

pub const HOWTO_SECTIONS: &[ContentSection] = &[
    ContentSection::new(
        "Can You Repair Woodpecker Damage Yourself?",
        "Minor woodpecker damage can sometimes be repaired by homeowners, but success depends on the siding type and extent of the damage. Improper repairs may fail to stop repeat pecking or allow moisture intrusion. For widespread or recurring damage, professional {woodpecker damage repair services} are often the safer option.",
    ),
    ContentSection::new(
        "How to Fix Woodpecker Holes in a House",
        "Fixing woodpecker holes in a house typically involves cleaning the damaged area, filling holes with appropriate exterior-grade filler, sanding the surface smooth, sealing the repair, and repainting or finishing to match the surrounding siding.",
    ),
    ContentSection::new(
        "How to Repair Woodpecker Holes in Wood Siding",
        "Repairing woodpecker holes in wood siding requires using fillers designed for exterior wood, followed by proper sealing and paint. Skipping these steps can lead to rot or visible patching.",
    ),
    ContentSection::new(
        "How to Repair Woodpecker Damage in Cedar Siding",
        "Cedar siding repairs must be handled carefully to preserve the wood grain and appearance. Improper filling or painting can make repairs stand out and reduce siding durability.",
    ),
    ContentSection::new(
        "How to Repair Woodpecker Damage in EIFS or Stucco",
        "EIFS and stucco repairs involve specialized patch materials and sealing techniques. Incorrect repairs can compromise the moisture barrier and lead to costly structural issues.",
    ),
    ContentSection::new(
        "Common Mistakes When Repairing Woodpecker Holes",
        "Common DIY mistakes include using interior fillers, failing to seal repairs properly, mismatching paint, and ignoring the cause of the woodpecker activity. These errors often result in repeat damage.",
    ),
    ContentSection::new(
        "When DIY Woodpecker Damage Repair Is Not Recommended",
        "DIY repair is not recommended when damage is extensive, affects EIFS or stucco systems, or when woodpeckers continue pecking after repairs. In these cases, contacting a provider that offers {woodpecker damage repair services} is the safest next step.",
    ),
];

pub const COST_SECTIONS: &[ContentSection] = &[
    ContentSection::new(
        "How Much Does Woodpecker Damage Repair Cost?",
        "Woodpecker damage repair typically costs between $200 and $1,500, depending on the number of holes, siding type, and extent of damage. Many homeowners compare DIY repairs against professional {woodpecker damage repair services} before deciding.",
    ),
    ContentSection::new(
        "What Affects the Cost of Woodpecker Damage Repair?",
        "Repair costs are influenced by siding material, size and quantity of holes, accessibility, height of the repair area, and whether moisture damage is present behind the siding.",
    ),
    ContentSection::new(
        "Cost to Repair Woodpecker Holes in Siding",
        "Repairing woodpecker holes in wood or cedar siding generally costs less than repairing EIFS or stucco, which require specialized materials and techniques.",
    ),
    ContentSection::new(
        "Woodpecker Damage Repair Cost for EIFS and Stucco",
        "EIFS and stucco repairs are often more expensive due to moisture barrier considerations and the need for precise patching to prevent future damage.",
    ),
    ContentSection::new(
        "Does Insurance Cover Woodpecker Damage?",
        "Insurance coverage for woodpecker damage varies by policy. Some homeowners insurance plans may cover damage if it is sudden and accidental, while others consider it maintenance-related. Policy review is recommended.",
    ),
    ContentSection::new(
        "When Professional Woodpecker Damage Repair Is Worth the Cost",
        "Professional repair is worth the cost when damage affects structural integrity, involves EIFS systems, or when repeat woodpecker activity continues. In these cases, professional {woodpecker damage repair services} provide long-term protection and peace of mind.",
    ),
];
