//! Deterministic prompt rendering.
//!
//! One function per task kind; each selects an instruction template for the
//! requested language, takes a hard character-budget prefix of the document
//! text, and reports whether anything was cut off. No side effects.

use crate::domain::Language;

/// Character budget for the document section of summarize/ask/analyze/review.
pub const ANALYSIS_BUDGET: usize = 15_000;
/// Character budget for drafting context and the compliance document.
pub const DRAFT_CONTEXT_BUDGET: usize = 12_000;
/// Per-document budget for comparison and for the compliance template.
pub const COMPARE_BUDGET: usize = 8_000;

#[derive(Debug, Clone)]
pub struct RenderedPrompt {
    pub text: String,
    /// True when any document section was cut to fit its budget.
    pub truncated: bool,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisPreset {
    #[default]
    Summary,
    Risk,
    Clauses,
    Timeline,
}

impl std::str::FromStr for AnalysisPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summary" => Ok(Self::Summary),
            "risk" => Ok(Self::Risk),
            "clauses" => Ok(Self::Clauses),
            "timeline" => Ok(Self::Timeline),
            other => Err(format!("Unknown analysis preset: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl std::str::FromStr for DraftLength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            other => Err(format!("Unknown draft length: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DraftSpec<'a> {
    pub doc_type: &'a str,
    pub requirements: Option<&'a str>,
    pub tone: Option<&'a str>,
    pub length: DraftLength,
}

/// Prefix-take within `budget` characters, counting chars rather than bytes so
/// the cut never lands inside a code point.
fn truncate(text: &str, budget: usize) -> (&str, bool) {
    match text.char_indices().nth(budget) {
        Some((byte_index, _)) => (&text[..byte_index], true),
        None => (text, false),
    }
}

fn document_label(lang: Language) -> &'static str {
    match lang {
        Language::Id => "Dokumen",
        Language::En => "Document",
    }
}

/// Schema directive appended to structured tasks. The field list is the closed
/// set recognized by the response parser.
fn schema_directive(lang: Language) -> &'static str {
    match lang {
        Language::Id => {
            "Balas HANYA dengan satu objek JSON, tanpa teks lain. Field yang boleh dipakai \
             (semuanya opsional): \"summary\" (string), \"risks\" (array), \
             \"recommendations\" (array), \"clauses\" (array), \"entities\" (objek), \
             \"timeline\" (array), \"citations\" (array). JSON saja."
        }
        Language::En => {
            "Reply with a SINGLE JSON object and nothing else. Allowed fields (all \
             optional): \"summary\" (string), \"risks\" (array), \"recommendations\" \
             (array), \"clauses\" (array), \"entities\" (object), \"timeline\" (array), \
             \"citations\" (array). JSON only."
        }
    }
}

pub fn summarize(lang: Language, doc_text: &str) -> RenderedPrompt {
    let (snippet, truncated) = truncate(doc_text, ANALYSIS_BUDGET);
    let instruction = match lang {
        Language::Id => {
            "Anda adalah asisten hukum berbahasa Indonesia. Ringkas dokumen berikut menjadi \
             poin-poin yang jelas, sertakan subjudul jika relevan, dan sorot risiko/isu hukum. \
             Jawab singkat dan to the point."
        }
        Language::En => {
            "You are a legal assistant. Summarize the following document into clear bullet \
             points, add subheadings where relevant, and highlight legal risks and issues. \
             Answer briefly and to the point."
        }
    };
    RenderedPrompt {
        text: format!("{}\n\n{}:\n\n{}", instruction, document_label(lang), snippet),
        truncated,
        max_tokens: 800,
        temperature: 0.2,
    }
}

pub fn ask(lang: Language, doc_text: &str, question: &str) -> RenderedPrompt {
    let (snippet, truncated) = truncate(doc_text, ANALYSIS_BUDGET);
    let (instruction, question_label) = match lang {
        Language::Id => (
            "Anda adalah asisten QnA yang hanya menjawab berdasarkan isi dokumen. Jika jawaban \
             tidak ada, katakan tidak ditemukan. Jawab ringkas dalam bahasa Indonesia, dan bila \
             relevan sertakan kutipan singkat dari dokumen.",
            "Pertanyaan",
        ),
        Language::En => (
            "You are a QnA assistant that answers only from the document content. If the answer \
             is not present, say it was not found. Answer concisely, and include a short quote \
             from the document where relevant.",
            "Question",
        ),
    };
    RenderedPrompt {
        text: format!(
            "{}\n\n{}:\n\n{}\n\n{}: {}",
            instruction,
            document_label(lang),
            snippet,
            question_label,
            question
        ),
        truncated,
        max_tokens: 800,
        temperature: 0.0,
    }
}

pub fn analyze(lang: Language, preset: AnalysisPreset, doc_text: &str) -> RenderedPrompt {
    let (snippet, truncated) = truncate(doc_text, ANALYSIS_BUDGET);
    let instruction = match (lang, preset) {
        (Language::Id, AnalysisPreset::Summary) => {
            "Anda adalah asisten hukum. Ringkas dokumen, tandai pasal/isu relevan, dan berikan \
             rekomendasi langkah singkat. Jawab ringkas dalam bahasa Indonesia."
        }
        (Language::Id, AnalysisPreset::Risk) => {
            "Anda adalah asisten hukum. Identifikasi risiko hukum dalam dokumen: klausul yang \
             merugikan, kewajiban tersembunyi, dan sanksi. Urutkan dari risiko terbesar."
        }
        (Language::Id, AnalysisPreset::Clauses) => {
            "Anda adalah asisten hukum. Daftar klausul penting dalam dokumen beserta isi \
             singkatnya, dan tandai klausul yang tidak lazim atau perlu negosiasi."
        }
        (Language::Id, AnalysisPreset::Timeline) => {
            "Anda adalah asisten hukum. Susun garis waktu kewajiban, tenggat, dan tanggal \
             penting yang disebut dalam dokumen, berurutan."
        }
        (Language::En, AnalysisPreset::Summary) => {
            "You are a legal assistant. Summarize the document, flag relevant articles and \
             issues, and give short recommended next steps."
        }
        (Language::En, AnalysisPreset::Risk) => {
            "You are a legal assistant. Identify the legal risks in the document: unfavorable \
             clauses, hidden obligations, and penalties. Order them by severity."
        }
        (Language::En, AnalysisPreset::Clauses) => {
            "You are a legal assistant. List the key clauses in the document with a short gloss \
             of each, and flag unusual clauses worth negotiating."
        }
        (Language::En, AnalysisPreset::Timeline) => {
            "You are a legal assistant. Lay out a timeline of the obligations, deadlines, and \
             key dates mentioned in the document, in order."
        }
    };
    RenderedPrompt {
        text: format!(
            "{}\n\n{}:\n{}\n\n{}",
            instruction,
            document_label(lang),
            snippet,
            schema_directive(lang)
        ),
        truncated,
        max_tokens: 800,
        temperature: 0.2,
    }
}

pub fn draft(lang: Language, spec: &DraftSpec<'_>, context: Option<&str>) -> RenderedPrompt {
    let mut truncated = false;
    let instruction = match lang {
        Language::Id => format!(
            "Anda adalah asisten hukum yang menyusun draf dokumen. Buat draf \"{}\" yang \
             lengkap dan siap disunting, dalam bahasa Indonesia baku.",
            spec.doc_type
        ),
        Language::En => format!(
            "You are a legal drafting assistant. Produce a complete, edit-ready draft of a \
             \"{}\".",
            spec.doc_type
        ),
    };

    let mut parts = vec![instruction];
    if let Some(requirements) = spec.requirements {
        parts.push(match lang {
            Language::Id => format!("Ketentuan yang diminta:\n{}", requirements),
            Language::En => format!("Requested terms:\n{}", requirements),
        });
    }
    if let Some(tone) = spec.tone {
        parts.push(match lang {
            Language::Id => format!("Nada penulisan: {}", tone),
            Language::En => format!("Tone: {}", tone),
        });
    }
    parts.push(match (lang, spec.length) {
        (Language::Id, DraftLength::Short) => "Panjang: ringkas, satu halaman.".to_string(),
        (Language::Id, DraftLength::Medium) => "Panjang: standar.".to_string(),
        (Language::Id, DraftLength::Long) => "Panjang: lengkap dan rinci.".to_string(),
        (Language::En, DraftLength::Short) => "Length: concise, one page.".to_string(),
        (Language::En, DraftLength::Medium) => "Length: standard.".to_string(),
        (Language::En, DraftLength::Long) => "Length: full and detailed.".to_string(),
    });
    if let Some(context) = context {
        let (snippet, cut) = truncate(context, DRAFT_CONTEXT_BUDGET);
        truncated = cut;
        parts.push(match lang {
            Language::Id => format!("Dokumen referensi:\n\n{}", snippet),
            Language::En => format!("Reference document:\n\n{}", snippet),
        });
    }

    RenderedPrompt {
        text: parts.join("\n\n"),
        truncated,
        max_tokens: 1500,
        temperature: 0.4,
    }
}

pub fn review(lang: Language, current: &str, previous: &str) -> RenderedPrompt {
    let (current_snippet, cut_a) = truncate(current, ANALYSIS_BUDGET);
    let (previous_snippet, cut_b) = truncate(previous, ANALYSIS_BUDGET);
    let (instruction, current_label, previous_label) = match lang {
        Language::Id => (
            "Anda adalah asisten hukum. Tinjau versi terbaru dokumen terhadap versi sebelumnya: \
             jelaskan perubahan penting, risiko yang muncul, dan rekomendasi tindak lanjut.",
            "Versi terbaru",
            "Versi sebelumnya",
        ),
        Language::En => (
            "You are a legal assistant. Review the current version of the document against the \
             previous one: explain the significant changes, any new risks, and recommended \
             follow-up.",
            "Current version",
            "Previous version",
        ),
    };
    RenderedPrompt {
        text: format!(
            "{}\n\n{}:\n{}\n\n{}:\n{}\n\n{}",
            instruction,
            current_label,
            current_snippet,
            previous_label,
            previous_snippet,
            schema_directive(lang)
        ),
        truncated: cut_a || cut_b,
        max_tokens: 1200,
        temperature: 0.2,
    }
}

pub fn compare(lang: Language, left: &str, right: &str) -> RenderedPrompt {
    let (left_snippet, cut_a) = truncate(left, COMPARE_BUDGET);
    let (right_snippet, cut_b) = truncate(right, COMPARE_BUDGET);
    let (instruction, left_label, right_label) = match lang {
        Language::Id => (
            "Anda adalah asisten hukum. Bandingkan kedua dokumen berikut: daftar perbedaan \
             substantif per bagian, dan sebutkan pihak mana yang diuntungkan oleh tiap \
             perbedaan. Jawab ringkas.",
            "Dokumen A",
            "Dokumen B",
        ),
        Language::En => (
            "You are a legal assistant. Compare the two documents below: list the substantive \
             differences section by section, and note which party each difference favors. \
             Answer concisely.",
            "Document A",
            "Document B",
        ),
    };
    RenderedPrompt {
        text: format!(
            "{}\n\n{}:\n{}\n\n{}:\n{}",
            instruction, left_label, left_snippet, right_label, right_snippet
        ),
        truncated: cut_a || cut_b,
        max_tokens: 1200,
        temperature: 0.2,
    }
}

pub fn compliance(lang: Language, doc_text: &str, template: &str) -> RenderedPrompt {
    let (doc_snippet, cut_a) = truncate(doc_text, DRAFT_CONTEXT_BUDGET);
    let (template_snippet, cut_b) = truncate(template, COMPARE_BUDGET);
    let (instruction, doc_label, template_label) = match lang {
        Language::Id => (
            "Anda adalah asisten kepatuhan hukum. Periksa apakah dokumen memenuhi setiap \
             ketentuan dalam templat acuan. Daftar ketentuan yang terpenuhi, yang tidak \
             terpenuhi, dan yang tidak dapat dipastikan.",
            "Dokumen",
            "Templat acuan",
        ),
        Language::En => (
            "You are a legal compliance assistant. Check whether the document satisfies every \
             requirement in the reference template. List which requirements are met, which are \
             not, and which cannot be determined.",
            "Document",
            "Reference template",
        ),
    };
    RenderedPrompt {
        text: format!(
            "{}\n\n{}:\n{}\n\n{}:\n{}",
            instruction, doc_label, doc_snippet, template_label, template_snippet
        ),
        truncated: cut_a || cut_b,
        max_tokens: 1200,
        temperature: 0.2,
    }
}
