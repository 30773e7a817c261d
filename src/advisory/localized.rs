//! Telugu advisory variants
//!
//! Per-label translations with the same shape as the English advisory
//! plus a `disease_name` field. Labels without a translation fall back
//! to a generic phrase dictionary; no live translation occurs.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use super::DiseaseAdvisory;

#[derive(Debug, Clone, Serialize)]
pub struct LocalizedAdvisory {
    pub disease_name: String,
    pub common_name: String,
    pub symptoms: String,
    pub prevention: Vec<String>,
    pub pests: Vec<String>,
    pub organic: String,
    pub chemical: String,
}

/// Localized advisory for a label, generic phrase fallback when no
/// per-label translation exists.
pub(super) fn for_label(label: &str, info: &DiseaseAdvisory) -> LocalizedAdvisory {
    TELUGU_ADVISORIES
        .get(label)
        .cloned()
        .unwrap_or_else(|| LocalizedAdvisory {
            disease_name: translate(label),
            common_name: translate(info.common_name),
            symptoms: translate(info.symptoms),
            prevention: info.precautions.iter().map(|p| translate(p)).collect(),
            pests: info.pests.iter().map(|p| translate(p)).collect(),
            organic: translate(info.organic),
            chemical: translate(info.chemical),
        })
}

/// Phrase dictionary lookup; untranslated text passes through unchanged
fn translate(text: &str) -> String {
    COMMON_TRANSLATIONS
        .get(text)
        .map(|t| t.to_string())
        .unwrap_or_else(|| text.to_string())
}

static COMMON_TRANSLATIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("None", "ఏవీ లేవు"),
        ("Unknown Disease", "తెలియని వ్యాధి"),
        ("Unknown symptoms", "తెలియని లక్షణాలు"),
        ("Unknown pest", "తెలియని కీటకం"),
        (
            "Use organic methods like neem oil, biocontrol agents, and cultural practices",
            "నీం ఆయిల్, జీవ నియంత్రణ ఏజెంట్లు మరియు సాంస్కృతిక పద్ధతుల వంటి సేంద్రీయ పద్ధతులను ఉపయోగించండి",
        ),
        (
            "Consult with agricultural expert for appropriate chemical treatments",
            "సరైన రసాయన చికిత్సల కోసం వ్యవసాయ నిపుణునితో సంప్రదించండి",
        ),
    ])
});

fn entry(
    disease_name: &str,
    common_name: &str,
    symptoms: &str,
    prevention: &[&str],
    pests: &[&str],
    organic: &str,
    chemical: &str,
) -> LocalizedAdvisory {
    LocalizedAdvisory {
        disease_name: disease_name.to_string(),
        common_name: common_name.to_string(),
        symptoms: symptoms.to_string(),
        prevention: prevention.iter().map(|p| p.to_string()).collect(),
        pests: pests.iter().map(|p| p.to_string()).collect(),
        organic: organic.to_string(),
        chemical: chemical.to_string(),
    }
}

static TELUGU_ADVISORIES: Lazy<HashMap<&'static str, LocalizedAdvisory>> = Lazy::new(|| {
    HashMap::from([
        (
            "Corn_(maize)___Cercospora_leaf_spot Gray_leaf_spot",
            entry(
                "మొక్కజొన్న ___ సెర్కోస్పోరా ఆకు మచ్చ బూడిద ఆకు మచ్చ",
                "మొక్కజొన్న బూడిద ఆకు మచ్చ",
                "ఆకులపై దీర్ఘచతురస్రాకార, బూడిద నుండి టాన్ రంగు మచ్చలు",
                &[
                    "అందుబాటులో ఉన్నప్పుడు నిరోధక సంకరాలను ఉపయోగించండి",
                    "కనీసం 2 సంవత్సరాలు నాన్-హోస్ట్ పంటలతో పంటలను తిప్పండి",
                    "ఫంగస్ మనుగడను తగ్గించడానికి పంట శేషాన్ని దున్నండి",
                    "అవసరమైతే ఫంగిసైడ్లను వర్తించండి",
                    "అదే పొలంలో నిరంతరం మొక్కజొన్న నాటకం నివారించండి",
                ],
                &["సెర్కోస్పోరా జియే-మేడిస్ (ఫంగస్)"],
                "నీం ఆయిల్ ఎక్స్ట్రాక్ట్ లేదా రాగి-ఆధారిత ఫంగిసైడ్లను వర్తించండి. ట్రైకోడెర్మా వంటి బయో-కంట్రోల్ ఏజెంట్లను ఉపయోగించండి.",
                "వ్యాధి యొక్క మొదటి సంకేతంలో అజాక్సిస్ట్రోబిన్ లేదా పైరాక్లోస్ట్రోబిన్-ఆధారిత ఫంగిసైడ్లను వర్తించండి.",
            ),
        ),
        (
            "Corn_(maize)___Common_rust_",
            entry(
                "మొక్కజొన్న ___ సాధారణ తుప్పు",
                "మొక్కజొన్న సాధారణ తుప్పు",
                "ఆకుల రెండు ఉపరితలాలపై చిన్న, వృత్తాకార నుండి పొడవాటి దాల్చినచెక్క-బ్రౌన్ పస్ట్యూల్స్",
                &[
                    "నిరోధక సంకరాలను నాటండి",
                    "వ్యాధి చక్రం ప్రారంభంలో ఫంగిసైడ్లను వర్తించండి",
                    "తుప్పు చరిత్ర ఉన్న ప్రాంతాలలో తరువాత నాటకం నివారించండి",
                    "వ్యాధిని కలిగి ఉండే స్వచ్ఛంద మొక్కజొన్న మొక్కలను తీసివేయండి",
                ],
                &["పక్సినియా సోర్ఘి (ఫంగస్)"],
                "సల్ఫర్ డస్ట్ లేదా రాగి-ఆధారిత స్ప్రేలను ఉపయోగించండి. గాలి ప్రసరణ కోసం సరైన మొక్కల దూరం నిర్వహించండి.",
                "పస్ట్యూల్స్ మొదట కనిపించినప్పుడు ప్రోపికోనాజోల్ వంటి ట్రయాజోల్-ఆధారిత ఫంగిసైడ్లను వర్తించండి.",
            ),
        ),
        (
            "Corn_(maize)___Northern_Leaf_Blight",
            entry(
                "మొక్కజొన్న ___ ఉత్తర ఆకు బ్లైట్",
                "మొక్కజొన్న ఉత్తర ఆకు బ్లైట్",
                "పొడవాటి, దీర్ఘవృత్తాకార, బూడిద-ఆకుపచ్చ మచ్చలు, పరిపక్వత చెందినకొద్దీ టాన్‌గా మారతాయి",
                &[
                    "నిరోధక సంకరాలను ఉపయోగించండి",
                    "నాన్-హోస్ట్ పంటలతో పంట భ్రమణం అభ్యసించండి",
                    "ఇనోక్యులమ్‌ను తగ్గించడానికి పంట శిధిలాలను దున్నండి",
                    "అవసరమైతే ఫంగిసైడ్లను వర్తించండి",
                ],
                &["ఎక్స్‌సెరోహిలమ్ టర్సికమ్ (ఫంగస్)"],
                "బేకింగ్ సోడా ద్రావణం (1 టీస్పూన్ ప్రతి గ్యాలన్ నీటికి) లేదా వెల్లుల్లి ఎక్స్ట్రాక్ట్ స్ప్రే వర్తించండి.",
                "స్ట్రోబిలూరిన్ లేదా ట్రయాజోల్ ఫంగిసైడ్లను ఉపయోగించండి.",
            ),
        ),
        (
            "Corn_(maize)___healthy",
            entry(
                "మొక్కజొన్న ఆరోగ్యకరమైన",
                "ఆరోగ్యకరమైన మొక్కజొన్న మొక్క",
                "కనిపించే వ్యాధి లక్షణాలు లేవు",
                &[
                    "సరైన మొక్క పోషణను నిర్వహించండి",
                    "పంట భ్రమణం అభ్యసించండి",
                    "వ్యాధి యొక్క ప్రారంభ సంకేతాల కోసం క్రమం తప్పకుండా పర్యవేక్షించండి",
                    "ధృవీకరించబడిన వ్యాధి-ఉచిత విత్తనాలను ఉపయోగించండి",
                ],
                &["ఏవీ లేవు"],
                "ప్రస్తుత సేంద్రీయ పద్ధతులను కొనసాగించండి. చికిత్స అవసరం లేదు.",
                "ఆరోగ్యకరమైన మొక్కలకు రసాయన చికిత్స అవసరం లేదు.",
            ),
        ),
        (
            "Potato___Early_blight",
            entry(
                "బంగాళాదుంప ___ ప్రారంభ బ్లైట్",
                "బంగాళాదుంప ప్రారంభ బ్లైట్",
                "లక్ష్యం మచ్చలను పోలిన మచ్చలలో కేంద్రిక వలయాలు, ప్రధానంగా పాత ఆకులపై",
                &[
                    "అందుబాటులో ఉన్నప్పుడు నిరోధక రకాలను ఉపయోగించండి",
                    "నివారణగా ఫంగిసైడ్లను వర్తించండి",
                    "ఆకు తడి తగ్గించడానికి ఓవర్‌హెడ్ నీటిపారుదల నివారించండి",
                    "సోకిన మొక్కల శిధిలాలను తీసివేసి నాశనం చేయండి",
                ],
                &["ఆల్టర్నేరియా సోలాని (ఫంగస్)"],
                "కంపోస్ట్ టీ లేదా బేకింగ్ సోడా ద్రావణంతో స్ప్రే చేయండి. రాగి-ఆధారిత ఫంగిసైడ్లను ఉపయోగించండి.",
                "ప్రతి 7-10 రోజులకు క్లోరోథాలోనిల్ లేదా మ్యాంకోజెబ్-ఆధారిత ఫంగిసైడ్లను వర్తించండి.",
            ),
        ),
        (
            "Potato___Late_blight",
            entry(
                "బంగాళాదుంప ___ లేట్ బ్లైట్",
                "బంగాళాదుంప లేట్ బ్లైట్",
                "వేగంగా విస్తరించే నీటి మచ్చలు, తడి పరిస్థితులలో తెలుపు ఫంగల్ వృద్ధి",
                &[
                    "ధృవీకరించబడిన వ్యాధి-ఉచిత విత్తన బంగాళాదుంపలను నాటండి",
                    "వ్యాధి కనిపించే ముందు ఫంగిసైడ్లను వర్తించండి",
                    "కల్ పైల్స్ మరియు స్వచ్ఛంద మొక్కలను నాశనం చేయండి",
                    "సాధ్యమైనప్పుడు ఓవర్‌హెడ్ నీటిపారుదల నివారించండి",
                ],
                &["ఫైటోఫ్తోరా ఇన్ఫెస్టాన్స్ (ఊమైసీట్)"],
                "రాగి సల్ఫేట్ లేదా హైడ్రోజన్ పెరాక్సైడ్ ద్రావణాన్ని వర్తించండి. సోకిన మొక్కలను వెంటనే తీసివేయండి.",
                "నివారణ చర్యగా మెటలాక్సిల్ లేదా మ్యాంకోజెబ్-ఆధారిత సిస్టమిక్ ఫంగిసైడ్లను ఉపయోగించండి.",
            ),
        ),
        (
            "Potato___healthy",
            entry(
                "బంగాళాదుంప ఆరోగ్యకరమైన",
                "ఆరోగ్యకరమైన బంగాళాదుంప మొక్క",
                "కనిపించే వ్యాధి లక్షణాలు లేవు",
                &[
                    "సరైన నేల సారాన్ని నిర్వహించండి",
                    "పంట భ్రమణం అభ్యసించండి",
                    "ధృవీకరించబడిన వ్యాధి-ఉచిత విత్తన బంగాళాదుంపలను ఉపయోగించండి",
                    "కీటకాల కోసం క్రమం తప్పకుండా పర్యవేక్షించండి",
                ],
                &["ఏవీ లేవు"],
                "ప్రస్తుత సేంద్రీయ పద్ధతులను కొనసాగించండి. చికిత్స అవసరం లేదు.",
                "రసాయన చికిత్స అవసరం లేదు.",
            ),
        ),
        (
            "Tomato___Bacterial_spot",
            entry(
                "టమాటా ___ బ్యాక్టీరియా స్పాట్",
                "టమాటా బ్యాక్టీరియా మచ్చ",
                "చిన్న, నీటి మచ్చలు ముదురుగా మారతాయి, తరచుగా పసుపు రంగు హాలోలతో",
                &[
                    "వ్యాధి-ఉచిత ధృవీకరించిన విత్తనాలను ఉపయోగించండి",
                    "నివారణగా రాగి-ఆధారిత బాక్టీరిసైడ్లను వర్తించండి",
                    "మొక్కలు తడిగా ఉన్నప్పుడు వాటితో పని చేయకండి",
                    "నాన్-హోస్ట్ పంటలతో పంట భ్రమణం అభ్యసించండి",
                ],
                &["జాంతోమోనాస్ క్యాంపెస్ట్రిస్ పి.వి. వెసికటోరియా (బాక్టీరియా)"],
                "రాగి బాక్టీరిసైడ్లు లేదా హైడ్రోజన్ పెరాక్సైడ్ స్ప్రేలను ఉపయోగించండి. మొక్క రోగనిరోధక శక్తి కోసం కంపోస్ట్ టీని వర్తించండి.",
                "తీవ్రమైన సందర్భాలలో స్ట్రెప్టోమైసిన్ లేదా ఆక్సిటెట్రాసైక్లిన్-ఆధారిత యాంటీబయాటిక్లను వర్తించండి.",
            ),
        ),
        (
            "Tomato___Early_blight",
            entry(
                "టమాటా ___ ప్రారంభ బ్లైట్",
                "టమాటా ప్రారంభ బ్లైట్",
                "లక్ష్యం వలె కనిపించే మచ్చలలో కేంద్రిక వలయాలు, తరచుగా పాత ఆకులపై ప్రారంభమవుతాయి",
                &[
                    "గాలి ప్రసరణ మెరుగుపడడానికి మొక్కలను కట్టండి",
                    "నివారణగా ఫంగిసైడ్లను వర్తించండి",
                    "మొక్క పెరిగేకొద్దీ దిగువ ఆకులను తీసివేయండి",
                    "నేల ఆకులపై చెరగకుండా మల్చ్ పెట్టండి",
                ],
                &["ఆల్టర్నేరియా సోలాని (ఫంగస్)"],
                "నీం ఆయిల్ లేదా బేకింగ్ సోడా ద్రావణంతో స్ప్రే చేయండి. నియంత్రణ కోసం రాగి ఫంగిసైడ్లను ఉపయోగించండి.",
                "7-10 రోజుల వ్యవధిలో క్లోరోథాలోనిల్ లేదా మ్యాంకోజెబ్-ఆధారిత ఫంగిసైడ్లను వర్తించండి.",
            ),
        ),
        (
            "Tomato___Late_blight",
            entry(
                "టమాటా ___ లేట్ బ్లైట్",
                "టమాటా లేట్ బ్లైట్",
                "వేగంగా విస్తరించే నీటి మచ్చలు, తడి పరిస్థితులలో ఆకుల క్రింద తెలుపు ఫంగల్ వృద్ధి",
                &[
                    "వ్యాధి కనిపించే ముందు ఫంగిసైడ్లను వర్తించండి",
                    "సోకిన మొక్కలను వెంటనే తీసివేసి నాశనం చేయండి",
                    "ఓవర్‌హెడ్ నీటిపారుదల నివారించండి",
                    "అందుబాటులో ఉన్నప్పుడు నిరోధక రకాలను ఎంచుకోండి",
                ],
                &["ఫైటోఫ్తోరా ఇన్ఫెస్టాన్స్ (ఊమైసీట్)"],
                "రాగి సల్ఫేట్ లేదా హైడ్రోజన్ పెరాక్సైడ్ ద్రావణాన్ని వర్తించండి. సోకిన మొక్కలను వెంటనే తీసివేయండి.",
                "నివారణ చర్యగా మెటలాక్సిల్ లేదా క్లోరోథాలోనిల్-ఆధారిత సిస్టమిక్ ఫంగిసైడ్లను ఉపయోగించండి.",
            ),
        ),
        (
            "Tomato___Leaf_Mold",
            entry(
                "టమాటా ___ ఆకు తుప్పు",
                "టమాటా ఆకు తుప్పు",
                "ఆకుల పై ఉపరితలాలపై పసుపు రంగు మచ్చలు, కింది భాగాలలో ఆలివ్-గ్రీన్ తుప్పు",
                &[
                    "గ్రీన్‌హౌస్ సెట్టింగ్స్‌లో మంచి గాలి ప్రసరణను నిర్వహించండి",
                    "సరైన వెంటిలేషన్ ద్వారా తేమను తగ్గించండి",
                    "నివారణగా ఫంగిసైడ్లను వర్తించండి",
                    "సోకిన ఆకులను తక్షణం తీసివేయండి",
                ],
                &["పాసలోరా ఫుల్వా (ఫంగస్)"],
                "వెంటిలేషన్‌ను మెరుగుపరచండి. పొటాషియం బైకార్బోనేట్ లేదా సల్ఫర్-ఆధారిత ఫంగిసైడ్లతో స్ప్రే చేయండి.",
                "ఇన్ఫెక్షన్ యొక్క మొదటి సంకేతంలో క్లోరోథాలోనిల్ లేదా మ్యాంకోజెబ్-ఆధారిత ఫంగిసైడ్లను వర్తించండి.",
            ),
        ),
        (
            "Tomato___Septoria_leaf_spot",
            entry(
                "టమాటా ___ సెప్టోరియా ఆకు మచ్చ",
                "టమాటా సెప్టోరియా ఆకు మచ్చ",
                "చిన్న, వృత్తాకార మచ్చలు ముదురు సరిహద్దులతో మరియు తేలికపాటి కేంద్రాలతో, తరచుగా నల్ల పైక్నిడియాతో",
                &[
                    "వ్యాధి యొక్క మొదటి సంకేతంలో ఫంగిసైడ్లను వర్తించండి",
                    "సోకిన ఆకులను తీసివేసి వాటిని నాశనం చేయండి",
                    "ఓవర్‌హెడ్ నీటిపారుదల నివారించండి",
                    "గాలి ప్రసరణ మెరుగుపడడానికి మొక్కలను కట్టండి",
                ],
                &["సెప్టోరియా లైకోపెర్సికి (ఫంగస్)"],
                "రాగి ఫంగిసైడ్లు లేదా నీం ఆయిల్‌ను ఉపయోగించండి. సోకిన ఆకులను తీసివేసి నాశనం చేయండి.",
                "ప్రతి 7-10 రోజులకు క్లోరోథాలోనిల్ లేదా మ్యాంకోజెబ్-ఆధారిత ఫంగిసైడ్లను వర్తించండి.",
            ),
        ),
        (
            "Tomato___Spider_mites Two-spotted_spider_mite",
            entry(
                "టమాటా ___ స్పైడర్ మైట్స్ టూ-స్పాటెడ్ స్పైడర్ మైట్",
                "టమాటా పై రెండు చుక్కల స్పైడర్ మైట్",
                "ఆకులపై స్టిప్లింగ్, సూక్ష్మ జాలకం, ఆకు పసుపు రంగు మరియు చివరికి ఆకుల రాల్చడం",
                &[
                    "ప్రెడేటరీ మైట్స్‌ను విడుదల చేయండి",
                    "ఇన్ఫెస్టేషన్ గుర్తించబడినప్పుడు మైటిసైడ్లను వర్తించండి",
                    "మైట్ పునరుత్పత్తిని నిరుత్సాహపరచడానికి తేమను పెంచండి",
                    "భారీగా సోకిన ఆకులను తీసివేయండి",
                ],
                &["టెట్రానిచస్ ఉర్టికే (మైట్)"],
                "ఫైటోసియులస్ పెర్సిమిలిస్ ప్రెడేటరీ మైట్స్‌ను విడుదల చేయండి. నీం ఆయిల్ లేదా ఇన్సెక్టిసైడల్ సోప్‌తో స్ప్రే చేయండి.",
                "మైట్స్ గుర్తించబడినప్పుడు అబామెక్టిన్ లేదా స్పైరోమెసిఫెన్-ఆధారిత మైటిసైడ్లను వర్తించండి.",
            ),
        ),
        (
            "Tomato___Target_Spot",
            entry(
                "టమాటా ___ టార్గెట్ స్పాట్",
                "టమాటా టార్గెట్ స్పాట్",
                "లక్ష్యాన్ని పోలి ఉండే కేంద్రిక వలయాలు కలిగిన వృత్తాకార మచ్చలు, తరచుగా పసుపు రంగు హాలోలతో",
                &[
                    "నివారణగా ఫంగిసైడ్లను వర్తించండి",
                    "పంట తర్వాత సోకిన మొక్కల శిధిలాలను తీసివేయండి",
                    "నాన్-హోస్ట్ పంటలతో పంట భ్రమణం అభ్యసించండి",
                    "సరైన దూరం ద్వారా గాలి ప్రసరణను మెరుగుపరచండి",
                ],
                &["కోరినెస్పోరా కాసిసికోలా (ఫంగస్)"],
                "రాగి-ఆధారిత ఫంగిసైడ్లు లేదా బేకింగ్ సోడా స్ప్రేలను ఉపయోగించండి. మొక్కల దూరాన్ని మెరుగుపరచండి.",
                "నివారణగా క్లోరోథాలోనిల్ లేదా మ్యాంకోజెబ్-ఆధారిత ఫంగిసైడ్లను వర్తించండి.",
            ),
        ),
        (
            "Tomato___Tomato_Yellow_Leaf_Curl_Virus",
            entry(
                "టమాటా ___ టమాటా యెల్లో లీఫ్ కర్ల్ వైరస్",
                "టమాటా యెల్లో లీఫ్ కర్ల్ వైరస్",
                "ఆకుల పైకి వంకరలు, ఆకుల అంచుల పసుపు రంగు, నిలిచిన వృద్ధి",
                &[
                    "అందుబాటులో ఉన్నప్పుడు నిరోధక రకాలను ఉపయోగించండి",
                    "ఇన్సెక్టిసైడ్లతో వైట్‌ఫ్లై జనాభాను నియంత్రించండి",
                    "వైరస్ మూలాన్ని తగ్గించడానికి సోకిన మొక్కలను తీసివేయండి",
                    "వైట్‌ఫ్లైలను నిరుత్సాహపరచడానికి రిఫ్లెక్టివ్ మల్చ్‌లను ఉపయోగించండి",
                ],
                &["బెమిసియా టాబాసి (వైట్‌ఫ్లై) - వెక్టర్", "టమాటా యెల్లో లీఫ్ కర్ల్ వైరస్"],
                "వైట్‌ఫ్లైల కోసం పసుపు స్టికీ ట్రాప్‌లను ఉపయోగించండి. నీం ఆయిల్‌తో స్ప్రే చేయండి. సోకిన మొక్కలను తీసివేయండి.",
                "వైట్‌ఫ్లై నియంత్రణ కోసం ఇమిడాక్లోప్రిడ్ లేదా థియామెథోక్సామ్ సిస్టమిక్ ఇన్సెక్టిసైడ్లను వర్తించండి.",
            ),
        ),
        (
            "Tomato___Tomato_mosaic_virus",
            entry(
                "టమాటా ___ టమాటా మొజైక్ వైరస్",
                "టమాటా మొజైక్ వైరస్",
                "ఆకులపై మచ్చల తేలికపాటి మరియు ముదురు ఆకుపచ్చ నమూనాలు, ఆకు వికృతీకరణ, తగ్గిన పండ్ల దిగుబడి",
                &[
                    "వైరస్-ఉచిత ధృవీకరించిన విత్తనాలను ఉపయోగించండి",
                    "బ్లీచ్ సొల్యూషన్‌తో సాధనాలను క్రమం తప్పకుండా శుభ్రపరచండి",
                    "ఆఫిడ్ జనాభాను నియంత్రించండి",
                    "సోకిన మొక్కలను తీసివేసి నాశనం చేయండి",
                ],
                &["వివిధ ఆఫిడ్ ప్రజాతులు - వెక్టర్లు", "టమాటా మొజైక్ వైరస్"],
                "పాల స్ప్రే (1 భాగం పాలు 9 భాగాలు నీరు) ఉపయోగించండి. నీం ఆయిల్‌తో ఆఫిడ్లను నియంత్రించండి.",
                "ప్రభావవంతమైన రసాయన చికిత్స లేదు. నివారణ మరియు వెక్టర్ నియంత్రణపై దృష్టి పెట్టండి.",
            ),
        ),
        (
            "Tomato___healthy",
            entry(
                "టమాటా ఆరోగ్యకరమైన",
                "ఆరోగ్యకరమైన టమాటా మొక్క",
                "కనిపించే వ్యాధి లక్షణాలు లేవు",
                &[
                    "సరైన మొక్క పోషణను నిర్వహించండి",
                    "పంట భ్రమణం అభ్యసించండి",
                    "వ్యాధి యొక్క ప్రారంభ సంకేతాల కోసం క్రమం తప్పకుండా పర్యవేక్షించండి",
                    "ధృవీకరించబడిన వ్యాధి-ఉచిత విత్తనాలను ఉపయోగించండి",
                ],
                &["ఏవీ లేవు"],
                "ప్రస్తుత సేంద్రీయ పద్ధతులను కొనసాగించండి. చికిత్స అవసరం లేదు.",
                "ఆరోగ్యకరమైన మొక్కలకు రసాయన చికిత్స అవసరం లేదు.",
            ),
        ),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::GENERIC_ADVISORY;
    use crate::inference::pest::PEST_LABELS;

    #[test]
    fn test_every_known_label_has_a_translation() {
        for label in PEST_LABELS {
            assert!(TELUGU_ADVISORIES.contains_key(label), "missing translation for {}", label);
        }
    }

    #[test]
    fn test_unknown_label_uses_phrase_dictionary() {
        let localized = for_label("Banana___Imaginary_blight", &GENERIC_ADVISORY);
        assert_eq!(localized.disease_name, "Banana___Imaginary_blight");
        assert_eq!(localized.common_name, "తెలియని వ్యాధి");
        assert_eq!(localized.symptoms, "తెలియని లక్షణాలు");
        assert_eq!(localized.pests, vec!["తెలియని కీటకం"]);
    }

    #[test]
    fn test_translation_shape_matches_english() {
        let localized = TELUGU_ADVISORIES
            .get("Tomato___Early_blight")
            .unwrap();
        assert_eq!(localized.prevention.len(), 4);
        assert!(!localized.organic.is_empty());
        assert!(!localized.chemical.is_empty());
    }
}
