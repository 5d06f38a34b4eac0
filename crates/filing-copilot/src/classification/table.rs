/// One NICE class entry in the keyword table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassEntry {
    pub number: u8,
    pub title: &'static str,
    pub keywords: Vec<&'static str>,
}

/// Read-only keyword table consulted by the classification engine.
///
/// Entries keep insertion order; ranking ties fall back to that order.
#[derive(Debug)]
pub struct ClassTable {
    entries: Vec<ClassEntry>,
}

impl ClassTable {
    pub fn standard() -> Self {
        Self {
            entries: standard_entries(),
        }
    }

    pub fn from_entries(entries: Vec<ClassEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ClassEntry] {
        &self.entries
    }

    pub fn title(&self, number: u8) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.number == number)
            .map(|entry| entry.title)
    }
}

// Illustrative coverage only; not a curated NICE index.
fn standard_entries() -> Vec<ClassEntry> {
    vec![
        ClassEntry {
            number: 1,
            title: "Chemicals",
            keywords: vec!["chemical", "fertilizer", "adhesive", "salt"],
        },
        ClassEntry {
            number: 3,
            title: "Cosmetics and Cleaning",
            keywords: vec![
                "cosmetic",
                "soap",
                "perfume",
                "shampoo",
                "detergent",
                "cleaning",
            ],
        },
        ClassEntry {
            number: 5,
            title: "Pharmaceuticals",
            keywords: vec![
                "pharmaceutical",
                "medicine",
                "supplement",
                "vitamin",
                "sanitary",
            ],
        },
        ClassEntry {
            number: 9,
            title: "Electronics and Software",
            keywords: vec![
                "software", "app", "computer", "camera", "sensor", "ai", "saas",
            ],
        },
        ClassEntry {
            number: 16,
            title: "Paper Goods; Printed Matter",
            keywords: vec!["book", "magazine", "stationery", "paper", "card"],
        },
        ClassEntry {
            number: 25,
            title: "Clothing, Footwear, Headgear",
            keywords: vec![
                "clothing", "t-shirt", "shirt", "shoe", "cap", "hoodie", "fashion",
            ],
        },
        ClassEntry {
            number: 30,
            title: "Staple Foods",
            keywords: vec!["coffee", "tea", "bread", "chocolate", "snack", "spice"],
        },
        ClassEntry {
            number: 32,
            title: "Beers and Non-alcoholic Beverages",
            keywords: vec!["juice", "soda", "water", "energy drink", "beer"],
        },
        ClassEntry {
            number: 33,
            title: "Alcoholic Beverages",
            keywords: vec!["wine", "whisky", "vodka", "gin"],
        },
        ClassEntry {
            number: 35,
            title: "Advertising; Retail Services",
            keywords: vec![
                "retail",
                "ecommerce",
                "marketing",
                "advertising",
                "online store",
                "online",
                "marketplace",
            ],
        },
        ClassEntry {
            number: 36,
            title: "Financial Services",
            keywords: vec!["banking", "payment", "wallet", "insurance", "fintech"],
        },
        ClassEntry {
            number: 38,
            title: "Telecommunications",
            keywords: vec!["telecom", "sms", "messaging", "isp", "network"],
        },
        ClassEntry {
            number: 41,
            title: "Education; Training",
            keywords: vec!["education", "course", "training", "school", "workshop"],
        },
        ClassEntry {
            number: 42,
            title: "Scientific and Technology Services",
            keywords: vec![
                "software development",
                "hosting",
                "cloud",
                "design",
                "engineering",
                "research",
            ],
        },
        ClassEntry {
            number: 43,
            title: "Food and Drink Services",
            keywords: vec!["restaurant", "cafe", "catering", "food truck"],
        },
        ClassEntry {
            number: 44,
            title: "Medical; Beauty; Agriculture",
            keywords: vec!["clinic", "spa", "beauty", "salon", "agriculture"],
        },
        ClassEntry {
            number: 45,
            title: "Legal and Security Services",
            keywords: vec!["legal", "security", "licensing", "ip services"],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_is_lowercase_and_unique() {
        let table = ClassTable::standard();
        assert_eq!(table.entries().len(), 17);

        let mut numbers: Vec<u8> = table.entries().iter().map(|entry| entry.number).collect();
        numbers.dedup();
        assert_eq!(numbers.len(), 17, "class numbers ascend without repeats");

        for entry in table.entries() {
            assert!(!entry.keywords.is_empty(), "class {} has keywords", entry.number);
            assert!(entry
                .keywords
                .iter()
                .all(|keyword| keyword.to_lowercase() == *keyword));
        }
    }

    #[test]
    fn title_lookup() {
        let table = ClassTable::standard();
        assert_eq!(table.title(30), Some("Staple Foods"));
        assert_eq!(table.title(35), Some("Advertising; Retail Services"));
        assert_eq!(table.title(2), None);
    }
}
