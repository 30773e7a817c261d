//! Disease advisory lookup
//!
//! Pure mapping from a predicted disease label to treatment and
//! prevention guidance, with a parallel Telugu variant. Unknown labels
//! resolve to a generic advisory, never an error.

mod localized;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

pub use localized::LocalizedAdvisory;

#[derive(Debug, Clone, Serialize)]
pub struct DiseaseAdvisory {
    pub common_name: &'static str,
    pub symptoms: &'static str,
    pub precautions: &'static [&'static str],
    pub pests: &'static [&'static str],
    pub organic: &'static str,
    pub chemical: &'static str,
}

/// Served for labels without a table entry
pub static GENERIC_ADVISORY: DiseaseAdvisory = DiseaseAdvisory {
    common_name: "Unknown Disease",
    symptoms: "Unknown symptoms",
    precautions: &["Consult local agricultural officer for specific advice"],
    pests: &["Unknown pest"],
    organic: "Use organic methods like neem oil, biocontrol agents, and cultural practices",
    chemical: "Consult with agricultural expert for appropriate chemical treatments",
};

/// Wire shape of the `advisory` payload stored on a pest report
#[derive(Debug, Clone, Serialize)]
pub struct AdvisoryPayload {
    pub organic: &'static str,
    pub chemical: &'static str,
    pub prevention: Vec<&'static str>,
    pub pests: Vec<&'static str>,
    pub common_name: &'static str,
    pub symptoms: &'static str,
    pub telugu: LocalizedAdvisory,
}

pub fn lookup(label: &str) -> &'static DiseaseAdvisory {
    DISEASE_ADVISORIES.get(label).unwrap_or(&GENERIC_ADVISORY)
}

/// Full bilingual payload for a predicted label
pub fn advisory_for(label: &str) -> AdvisoryPayload {
    let info = lookup(label);

    AdvisoryPayload {
        organic: info.organic,
        chemical: info.chemical,
        prevention: info.precautions.to_vec(),
        pests: info.pests.to_vec(),
        common_name: info.common_name,
        symptoms: info.symptoms,
        telugu: localized::for_label(label, info),
    }
}

static DISEASE_ADVISORIES: Lazy<HashMap<&'static str, DiseaseAdvisory>> = Lazy::new(|| {
    HashMap::from([
        (
            "Corn_(maize)___Cercospora_leaf_spot Gray_leaf_spot",
            DiseaseAdvisory {
                common_name: "Gray Leaf Spot of Corn",
                symptoms: "Rectangular, gray to tan lesions on leaves that are bounded by leaf veins",
                precautions: &[
                    "Use resistant hybrids when available",
                    "Rotate crops with non-host crops for at least 2 years",
                    "Plow under crop residue to reduce fungus survival",
                    "Apply fungicides when necessary",
                    "Avoid continuous corn planting in the same field",
                ],
                pests: &["Cercospora zeae-maydis (fungus)"],
                organic: "Apply neem oil extract or copper-based fungicides. Use bio-control agents like Trichoderma.",
                chemical: "Apply azoxystrobin or pyraclostrobin-based fungicides at first sign of disease.",
            },
        ),
        (
            "Corn_(maize)___Common_rust_",
            DiseaseAdvisory {
                common_name: "Common Rust of Corn",
                symptoms: "Small, circular to elongated cinnamon-brown pustules on both leaf surfaces",
                precautions: &[
                    "Plant resistant hybrids",
                    "Apply fungicides early in the disease cycle",
                    "Avoid late planting in areas with history of rust",
                    "Remove volunteer corn plants that can harbor the disease",
                ],
                pests: &["Puccinia sorghi (fungus)"],
                organic: "Use sulfur dust or copper-based sprays. Maintain proper plant spacing for air circulation.",
                chemical: "Apply triazole-based fungicides like propiconazole when pustules first appear.",
            },
        ),
        (
            "Corn_(maize)___Northern_Leaf_Blight",
            DiseaseAdvisory {
                common_name: "Northern Corn Leaf Blight",
                symptoms: "Long, elliptical, gray-green lesions that turn tan as they mature",
                precautions: &[
                    "Use resistant hybrids",
                    "Practice crop rotation with non-host crops",
                    "Till under crop debris to reduce inoculum",
                    "Apply fungicides when necessary",
                ],
                pests: &["Exserohilum turcicum (fungus)"],
                organic: "Apply baking soda solution (1 tbsp per gallon of water) or garlic extract spray.",
                chemical: "Use strobilurin or triazole fungicides like trifloxystrobin or tebuconazole.",
            },
        ),
        (
            "Corn_(maize)___healthy",
            DiseaseAdvisory {
                common_name: "Healthy Corn Plant",
                symptoms: "No visible disease symptoms",
                precautions: &[
                    "Maintain proper plant nutrition",
                    "Practice crop rotation",
                    "Monitor regularly for early signs of disease",
                    "Use certified disease-free seeds",
                ],
                pests: &["None"],
                organic: "Continue good agricultural practices. No treatment needed.",
                chemical: "No chemical treatment required for healthy plants.",
            },
        ),
        (
            "Potato___Early_blight",
            DiseaseAdvisory {
                common_name: "Early Blight of Potato",
                symptoms: "Concentric rings in lesions that resemble target spots, primarily on older leaves",
                precautions: &[
                    "Use resistant varieties when available",
                    "Apply fungicides preventatively",
                    "Avoid overhead irrigation to reduce leaf wetness",
                    "Remove and destroy infected plant debris",
                ],
                pests: &["Alternaria solani (fungus)"],
                organic: "Spray with compost tea or baking soda solution. Use copper-based fungicides.",
                chemical: "Apply chlorothalonil or mancozeb-based fungicides every 7-10 days.",
            },
        ),
        (
            "Potato___Late_blight",
            DiseaseAdvisory {
                common_name: "Late Blight of Potato",
                symptoms: "Water-soaked lesions that expand rapidly, white fungal growth under humid conditions",
                precautions: &[
                    "Plant certified disease-free seed potatoes",
                    "Apply fungicides before disease appears",
                    "Destroy cull piles and volunteer plants",
                    "Avoid overhead irrigation when possible",
                ],
                pests: &["Phytophthora infestans (oomycete)"],
                organic: "Apply copper sulfate or hydrogen peroxide solution. Remove infected plants immediately.",
                chemical: "Use metalaxyl or mancozeb-based systemic fungicides as preventive measure.",
            },
        ),
        (
            "Potato___healthy",
            DiseaseAdvisory {
                common_name: "Healthy Potato Plant",
                symptoms: "No visible disease symptoms",
                precautions: &[
                    "Maintain proper soil fertility",
                    "Practice crop rotation",
                    "Use certified disease-free seed potatoes",
                    "Monitor for pests regularly",
                ],
                pests: &["None"],
                organic: "Maintain current organic practices. No treatment needed.",
                chemical: "No chemical treatment required.",
            },
        ),
        (
            "Tomato___Bacterial_spot",
            DiseaseAdvisory {
                common_name: "Bacterial Spot of Tomato",
                symptoms: "Small, water-soaked spots that become dark and scabby, often with yellow halos",
                precautions: &[
                    "Use disease-free certified seeds",
                    "Apply copper-based bactericides preventatively",
                    "Avoid working with plants when they are wet",
                    "Practice crop rotation with non-host crops",
                ],
                pests: &["Xanthomonas campestris pv. vesicatoria (bacteria)"],
                organic: "Use copper bactericides or hydrogen peroxide sprays. Apply compost tea for plant immunity.",
                chemical: "Apply streptomycin or oxytetracycline-based antibiotics in severe cases.",
            },
        ),
        (
            "Tomato___Early_blight",
            DiseaseAdvisory {
                common_name: "Early Blight of Tomato",
                symptoms: "Target-like concentric rings in lesions, often starting on lower leaves",
                precautions: &[
                    "Stake plants to improve air circulation",
                    "Apply fungicides preventatively",
                    "Remove lower leaves as plant grows",
                    "Mulch to prevent soil splashing onto leaves",
                ],
                pests: &["Alternaria solani (fungus)"],
                organic: "Spray with neem oil or baking soda solution. Use copper fungicides for control.",
                chemical: "Apply chlorothalonil or mancozeb-based fungicides at 7-10 day intervals.",
            },
        ),
        (
            "Tomato___Late_blight",
            DiseaseAdvisory {
                common_name: "Late Blight of Tomato",
                symptoms: "Water-soaked lesions that expand rapidly, white fungal growth under leaves in humidity",
                precautions: &[
                    "Apply fungicides before disease appears",
                    "Remove and destroy infected plants immediately",
                    "Avoid overhead irrigation",
                    "Choose resistant varieties when available",
                ],
                pests: &["Phytophthora infestans (oomycete)"],
                organic: "Apply copper-based fungicides or hydrogen peroxide. Remove infected plants promptly.",
                chemical: "Use metalaxyl or chlorothalonil-based systemic fungicides preventatively.",
            },
        ),
        (
            "Tomato___Leaf_Mold",
            DiseaseAdvisory {
                common_name: "Leaf Mold of Tomato",
                symptoms: "Yellowish spots on upper leaf surfaces with olive-green mold on undersides",
                precautions: &[
                    "Maintain good air circulation in greenhouse settings",
                    "Reduce humidity through proper ventilation",
                    "Apply fungicides preventatively",
                    "Remove infected leaves promptly",
                ],
                pests: &["Passalora fulva (fungus)"],
                organic: "Improve ventilation. Spray with potassium bicarbonate or sulfur-based fungicides.",
                chemical: "Apply chlorothalonil or mancozeb-based fungicides at first sign of infection.",
            },
        ),
        (
            "Tomato___Septoria_leaf_spot",
            DiseaseAdvisory {
                common_name: "Septoria Leaf Spot of Tomato",
                symptoms: "Small, circular spots with dark borders and light centers, often with black pycnidia",
                precautions: &[
                    "Apply fungicides at first sign of disease",
                    "Remove infected leaves and destroy them",
                    "Avoid overhead watering",
                    "Stake plants to improve air circulation",
                ],
                pests: &["Septoria lycopersici (fungus)"],
                organic: "Use copper fungicides or neem oil. Remove and destroy infected leaves.",
                chemical: "Apply chlorothalonil or mancozeb-based fungicides every 7-10 days.",
            },
        ),
        (
            "Tomato___Spider_mites Two-spotted_spider_mite",
            DiseaseAdvisory {
                common_name: "Two-Spotted Spider Mite on Tomato",
                symptoms: "Stippling on leaves, fine webbing, leaf yellowing and eventual defoliation",
                precautions: &[
                    "Release predatory mites",
                    "Apply miticides when infestation is detected",
                    "Increase humidity to discourage mite reproduction",
                    "Remove heavily infested leaves",
                ],
                pests: &["Tetranychus urticae (mite)"],
                organic: "Release Phytoseiulus persimilis predatory mites. Spray with neem oil or insecticidal soap.",
                chemical: "Apply abamectin or spiromesifen-based miticides when mites are detected.",
            },
        ),
        (
            "Tomato___Target_Spot",
            DiseaseAdvisory {
                common_name: "Target Spot of Tomato",
                symptoms: "Circular spots with concentric rings resembling a target, often with yellow halos",
                precautions: &[
                    "Apply fungicides preventatively",
                    "Remove infected plant debris after harvest",
                    "Practice crop rotation with non-host crops",
                    "Improve air circulation through proper spacing",
                ],
                pests: &["Corynespora cassiicola (fungus)"],
                organic: "Use copper-based fungicides or baking soda sprays. Improve plant spacing.",
                chemical: "Apply chlorothalonil or mancozeb-based fungicides preventatively.",
            },
        ),
        (
            "Tomato___Tomato_Yellow_Leaf_Curl_Virus",
            DiseaseAdvisory {
                common_name: "Tomato Yellow Leaf Curl Virus",
                symptoms: "Upward curling of leaves, yellowing of leaf margins, stunted growth",
                precautions: &[
                    "Use resistant varieties when available",
                    "Control whitefly populations with insecticides",
                    "Remove infected plants to reduce virus source",
                    "Use reflective mulches to deter whiteflies",
                ],
                pests: &["Bemisia tabaci (whitefly) - vector", "Tomato yellow leaf curl virus"],
                organic: "Use yellow sticky traps for whiteflies. Spray with neem oil. Remove infected plants.",
                chemical: "Apply imidacloprid or thiamethoxam systemic insecticides for whitefly control.",
            },
        ),
        (
            "Tomato___Tomato_mosaic_virus",
            DiseaseAdvisory {
                common_name: "Tomato Mosaic Virus",
                symptoms: "Mottled light and dark green patterns on leaves, leaf distortion, reduced fruit yield",
                precautions: &[
                    "Use virus-free certified seeds",
                    "Disinfect tools regularly with bleach solution",
                    "Control aphid populations",
                    "Remove and destroy infected plants",
                ],
                pests: &["Various aphid species - vectors", "Tomato mosaic virus"],
                organic: "Use milk spray (1 part milk to 9 parts water). Control aphids with neem oil.",
                chemical: "No effective chemical treatment. Focus on prevention and vector control.",
            },
        ),
        (
            "Tomato___healthy",
            DiseaseAdvisory {
                common_name: "Healthy Tomato Plant",
                symptoms: "No visible disease symptoms",
                precautions: &[
                    "Maintain proper plant nutrition",
                    "Practice crop rotation",
                    "Monitor regularly for early signs of disease",
                    "Use certified disease-free seeds",
                ],
                pests: &["None"],
                organic: "Continue current organic practices. No treatment required.",
                chemical: "No chemical treatment needed for healthy plants.",
            },
        ),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::pest::PEST_LABELS;

    #[test]
    fn test_unknown_label_gets_generic_advisory() {
        let advisory = lookup("Banana___Imaginary_blight");
        assert_eq!(advisory.common_name, "Unknown Disease");

        // Full payload still builds without error
        let payload = advisory_for("Banana___Imaginary_blight");
        assert_eq!(payload.common_name, "Unknown Disease");
        assert!(!payload.telugu.common_name.is_empty());
    }

    #[test]
    fn test_every_known_label_has_an_entry() {
        for label in PEST_LABELS {
            let advisory = lookup(label);
            assert_ne!(advisory.common_name, "Unknown Disease", "missing entry for {}", label);
            assert!(!advisory.precautions.is_empty());
            assert!(!advisory.pests.is_empty());
        }
    }

    #[test]
    fn test_known_label_payload() {
        let payload = advisory_for("Potato___Late_blight");
        assert_eq!(payload.common_name, "Late Blight of Potato");
        assert_eq!(payload.pests, vec!["Phytophthora infestans (oomycete)"]);
        assert_eq!(payload.telugu.common_name, "బంగాళాదుంప లేట్ బ్లైట్");
    }
}
