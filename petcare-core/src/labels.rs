//! Display labels for categorical codes.

/// Label for a symptom tag. Unknown tags are returned unchanged.
pub fn symptom_type_label(symptom_type: &str) -> &str {
    match symptom_type {
        "tear" => "淚腺/淚痕",
        "skin" => "皮膚搔癢",
        "digestive" => "腸胃敏感",
        "oral" => "口臭牙結石",
        "ear" => "耳朵發炎",
        "joint" => "關節",
        "other" => "其他",
        other => other,
    }
}

/// Label for a product type code. Unknown codes are returned unchanged.
pub fn product_type_label(product_type: &str) -> &str {
    match product_type {
        "feed" => "飼料",
        "can" => "罐頭",
        "snack" => "零食",
        "supplement" => "保健品",
        "dental" => "牙膏牙粉",
        "shampoo" => "洗毛精",
        "other" => "其他",
        other => other,
    }
}

const SEVERITY_LABELS: [&str; 6] = ["正常", "輕微", "輕度", "中度", "嚴重", "極重"];

/// Label for a 0-5 severity score; out-of-range values are clamped.
pub fn severity_label(level: i32) -> &'static str {
    SEVERITY_LABELS[level.clamp(0, 5) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symptom_labels() {
        assert_eq!(symptom_type_label("tear"), "淚腺/淚痕");
        assert_eq!(symptom_type_label("joint"), "關節");
        assert_eq!(symptom_type_label("sneeze"), "sneeze");
    }

    #[test]
    fn test_product_labels() {
        assert_eq!(product_type_label("can"), "罐頭");
        assert_eq!(product_type_label("toy"), "toy");
    }

    #[test]
    fn test_severity_clamped() {
        assert_eq!(severity_label(0), "正常");
        assert_eq!(severity_label(3), "中度");
        assert_eq!(severity_label(-2), "正常");
        assert_eq!(severity_label(9), "極重");
    }
}
