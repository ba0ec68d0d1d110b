//! Built-in fallback dataset.
//!
//! A small cut of the national price list, kept in the binary so search
//! and comparison still work when the published dataset is unreachable or
//! malformed. Mirrors the upstream record shape exactly; prices are real
//! per-unit KRW reimbursement prices at the time the cut was taken.

use crate::models::Drug;

fn entry(
    id: &str,
    name: &str,
    ingredient_code: &str,
    ingredient_name: &str,
    price: u32,
    manufacturer: &str,
    category: &str,
) -> Drug {
    Drug {
        id: id.into(),
        name: name.into(),
        ingredient_code: ingredient_code.into(),
        ingredient_name: ingredient_name.into(),
        price,
        manufacturer: manufacturer.into(),
        category: category.into(),
        image: None,
    }
}

/// The fallback records: 16 products across 5 ingredient groups common in
/// outpatient prescriptions.
pub fn sample_drugs() -> Vec<Drug> {
    vec![
        // Celecoxib (Celebrex) - very common in orthopedics
        entry("1", "쎄레브렉스캡슐200mg", "636701ATB", "Celecoxib", 523, "한국비아트리스", "NSAID"),
        entry("2", "콕시비캡슐200mg", "636701ATB", "Celecoxib", 350, "한미약품", "NSAID"),
        entry("3", "셀레브이캡슐200mg", "636701ATB", "Celecoxib", 298, "종근당", "NSAID"),
        entry("4", "쏘롱캡슐200mg", "636701ATB", "Celecoxib", 285, "대웅제약", "NSAID"),
        // Aceclofenac (Airtal)
        entry("5", "에어탈정", "101301ATB", "Aceclofenac", 184, "대웅제약", "NSAID"),
        entry("6", "아세페낙정", "101301ATB", "Aceclofenac", 110, "부광약품", "NSAID"),
        entry("7", "에이서정", "101301ATB", "Aceclofenac", 98, "경동제약", "NSAID"),
        // Acetaminophen ER (Tylenol 8hr)
        entry("8", "타이레놀8시간이알서방정", "115201ATB", "Acetaminophen", 510, "한국얀센", "Analgesic"),
        entry("9", "써스펜8시간이알서방정", "115201ATB", "Acetaminophen", 250, "한미약품", "Analgesic"),
        entry("10", "타이리콜8시간이알서방정", "115201ATB", "Acetaminophen", 198, "하나제약", "Analgesic"),
        // Limaprost (Opalmon) - spinal stenosis
        entry("11", "오팔몬정", "185301ATB", "Limaprost", 350, "동아에스티", "Circulation"),
        entry("12", "리마펠정", "185301ATB", "Limaprost", 210, "종근당", "Circulation"),
        entry("13", "오파스트정", "185301ATB", "Limaprost", 185, "한미약품", "Circulation"),
        // Rebamipide (Mucosta) - gastric protector
        entry("14", "무코스타정100mg", "222901ATB", "Rebamipide", 106, "한국오츠카", "Gastric"),
        entry("15", "레바넥스정", "222901ATB", "Rebamipide", 75, "대웅제약", "Gastric"),
        entry("16", "무코원정", "222901ATB", "Rebamipide", 68, "동구바이오", "Gastric"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sixteen_records_in_five_groups() {
        let drugs = sample_drugs();
        assert_eq!(drugs.len(), 16);

        let groups: HashSet<&str> = drugs.iter().map(|d| d.ingredient_code.as_str()).collect();
        assert_eq!(groups.len(), 5);
    }

    #[test]
    fn test_ids_are_unique() {
        let drugs = sample_drugs();
        let ids: HashSet<&str> = drugs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids.len(), drugs.len());
    }

    #[test]
    fn test_celecoxib_group_prices() {
        let drugs = sample_drugs();
        let mut prices: Vec<u32> = drugs
            .iter()
            .filter(|d| d.ingredient_code == "636701ATB")
            .map(|d| d.price)
            .collect();
        prices.sort_unstable();
        assert_eq!(prices, vec![285, 298, 350, 523]);
    }

    #[test]
    fn test_no_record_ships_with_an_image() {
        assert!(sample_drugs().iter().all(|d| d.image.is_none()));
    }
}
