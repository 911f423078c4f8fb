//! View rendering for the document workflow page.
//!
//! Three cards, top to bottom: upload, extracted data (once a document is
//! loaded) and IELTS eligibility (academic documents only). Every form is
//! rendered from the document type's field catalogue, so the academic and
//! financial shapes share the same code path.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use common::error::WorkflowError;
use common::model::document::{DocType, ExtractedFields, ACCEPTED_EXTENSIONS};
use common::model::eligibility::{Band, EligibilityResult, MAX_BAND_SCORE, MIN_BAND_SCORE};
use common::model::fields::{input_text, FieldKind, FieldSpec};
use common::workflow::Review;

use super::dialogs::record::record_dialog;
use super::helpers::{format_amount, format_file_size, pretty_json};
use super::messages::{Msg, WorkflowMsg};
use super::state::DocumentWorkflowComponent;
use super::styles;

type Link = Scope<DocumentWorkflowComponent>;

/// Main view function for the document workflow page.
/// Renders the header, the upload card, the extracted-data card once a
/// document is loaded, and the eligibility card for academic documents.
pub fn view(component: &DocumentWorkflowComponent, ctx: &Context<DocumentWorkflowComponent>) -> Html {
    let link = ctx.link();
    let workflow = &component.workflow;

    html! {
        <div class="document-workflow" style="max-width:900px;margin:auto;padding:32px 16px;font-family:Roboto, Arial, sans-serif;">
            <h1 style="font-weight:600;">{"UnivAegis – Document Verification & Eligibility"}</h1>
            <p style="color:#666;">
                {"Upload academic or financial documents, extract key data using OCR, and check eligibility based on academic performance and IELTS scores."}
            </p>

            { build_upload_card(component, link) }

            {
                match &workflow.review {
                    Some(review) => build_extracted_card(component, review, link),
                    None => html! {},
                }
            }

            {
                if workflow.eligibility_applies() {
                    build_eligibility_card(component, link)
                } else {
                    html! {}
                }
            }

            { record_dialog(component, link) }
        </div>
    }
}

/// Card 1: file picker, document type and the upload button.
fn build_upload_card(component: &DocumentWorkflowComponent, link: &Link) -> Html {
    let workflow = &component.workflow;
    let picker_label = match &workflow.selection {
        Some(selection) => format!("{} · {}", selection.name, format_file_size(selection.size)),
        None => "Choose File".to_string(),
    };
    let uploading = workflow.is_uploading();

    html! {
        <div class="card" style={styles::CARD}>
            <h2>{"1. Upload Document"}</h2>
            <div style={styles::ROW}>
                <label class="file-picker" style="flex:2;border:1px solid #1976d2;color:#1976d2;border-radius:4px;padding:8px 16px;cursor:pointer;display:flex;align-items:center;gap:8px;">
                    <i class="material-icons">{"cloud_upload"}</i>
                    <span>{ picker_label }</span>
                    <input
                        type="file"
                        hidden=true
                        accept={ACCEPTED_EXTENSIONS}
                        ref={component.file_input_ref.clone()}
                        onchange={link.callback(|e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::FileChosen(input.files().and_then(|files| files.get(0)))
                        })}
                    />
                </label>
                <div style={styles::FIELD}>
                    <label>{"Document Type"}</label>
                    <select
                        onchange={link.callback(|e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            let doc_type = DocType::parse(&select.value()).unwrap_or_default();
                            Msg::Workflow(WorkflowMsg::SelectDocType(doc_type))
                        })}
                    >
                        { for DocType::ALL.iter().map(|doc_type| html! {
                            <option value={doc_type.as_str()} selected={*doc_type == workflow.doc_type}>
                                { doc_type.label() }
                            </option>
                        }) }
                    </select>
                </div>
                <button
                    class="primary-btn"
                    disabled={uploading}
                    onclick={link.callback(|_| Msg::Workflow(WorkflowMsg::SubmitUpload))}
                >
                    {
                        if uploading {
                            busy_label("Uploading...")
                        } else {
                            html! { {"Upload & Extract"} }
                        }
                    }
                </button>
            </div>
            { error_alert(workflow.upload.error.as_ref()) }
        </div>
    }
}

/// Card 2: document metadata, editable fields, save controls and the raw
/// JSON preview.
fn build_extracted_card(component: &DocumentWorkflowComponent, review: &Review, link: &Link) -> Html {
    let record = &review.record;

    html! {
        <div class="card" style={styles::CARD}>
            <h2>{"2. Extracted Document Data"}</h2>
            <p style="color:#666;font-size:14px;">
                <strong>{"Document ID: "}</strong>{ record.id }
                {" | "}<strong>{"Type: "}</strong>{ record.doc_type.as_str() }
                {" | "}<strong>{"File: "}</strong>{ record.original_filename.clone() }
                {
                    match record.ocr_confidence {
                        Some(confidence) => html! {
                            <>{" | "}<strong>{"OCR confidence: "}</strong>{ format!("{:.2}", confidence) }</>
                        },
                        None => html! {},
                    }
                }
            </p>
            <hr />
            {
                match &review.extracted {
                    Some(extracted) => html! {
                        <>
                            { build_summary(review.fields()) }
                            <h3>
                                {"Extracted Fields"}
                                {
                                    if review.is_dirty() {
                                        html! { <span title="Unsaved changes" style={styles::DIRTY_DOT} /> }
                                    } else {
                                        html! {}
                                    }
                                }
                            </h3>
                            { build_field_form(review, link) }
                            { build_save_controls(component, link) }

                            <h4 style="margin-top:24px;">{"Raw Extracted JSON (after save)"}</h4>
                            <pre style={styles::RAW_JSON}>{ pretty_json(extracted) }</pre>
                            <button class="text-btn" onclick={link.callback(|_| Msg::OpenRecordDialog)}>
                                <i class="material-icons">{"data_object"}</i>
                                {"View raw JSON"}
                            </button>
                        </>
                    },
                    None => html! {
                        <div style={styles::alert("warning")}>{"No extracted data found for this document."}</div>
                    },
                }
            }
        </div>
    }
}

/// One-line digest of the committed values, read through the typed view.
fn build_summary(fields: Option<ExtractedFields>) -> Html {
    let Some(fields) = fields else {
        return html! {};
    };
    let mut parts: Vec<String> = Vec::new();
    if let Some(holder) = fields.holder() {
        parts.push(holder.to_string());
    }
    match &fields {
        ExtractedFields::Academic(academic) => {
            if let Some(university) = &academic.university {
                parts.push(university.clone());
            }
            if let Some(percentage) = academic.percentage {
                parts.push(format!("{}%", percentage));
            }
            if let Some(gpa) = academic.gpa {
                parts.push(format!("GPA {}", gpa));
            }
            if let Some(year) = academic.year_of_passing {
                parts.push(format!("passed {}", year));
            }
        }
        ExtractedFields::Financial(financial) => {
            if let Some(bank) = &financial.bank_name {
                parts.push(bank.clone());
            }
            if let Some(balance) = financial.available_balance {
                parts.push(format!("balance {}", format_amount(balance)));
            }
            if let Some(date) = &financial.date {
                parts.push(format!("as of {}", date));
            }
        }
    }
    if parts.is_empty() {
        return html! {};
    }

    html! {
        <p class="extracted-summary" style="font-size:14px;">
            <i class="material-icons" style="vertical-align:middle;font-size:18px;margin-right:4px;">{"summarize"}</i>
            { parts.join(" · ") }
        </p>
    }
}

/// Editable form for the current document, one input per catalogue field.
fn build_field_form(review: &Review, link: &Link) -> Html {
    html! {
        <div style={styles::ROW}>
            { for review.doc_type().fields().iter().map(|field| build_field(field, review, link)) }
        </div>
    }
}

/// Renders one catalogue entry as a labelled input with helper and
/// advisory warning lines.
fn build_field(field: &'static FieldSpec, review: &Review, link: &Link) -> Html {
    let draft = review.buffer.get(field.key);
    let warning = field.warning(draft);
    let (input_type, step): (&'static str, Option<AttrValue>) = match field.kind {
        FieldKind::Text => ("text", None),
        FieldKind::Decimal { step } => ("number", Some(AttrValue::Static(step))),
        FieldKind::Integer => ("number", Some(AttrValue::Static("1"))),
    };
    let key = field.key;
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::Workflow(WorkflowMsg::EditField {
            key: key.to_string(),
            value: input.value(),
        })
    });

    html! {
        <div class="field" style={styles::FIELD}>
            <label for={field.key}>{ field.label }</label>
            <input
                id={field.key}
                type={input_type}
                value={input_text(draft)}
                step={step}
                min={field.min.map(|min| AttrValue::from(min.to_string()))}
                max={field.max.map(|max| AttrValue::from(max.to_string()))}
                {oninput}
            />
            { hint(field.helper.map(str::to_string), styles::HINT) }
            { hint(warning, styles::WARNING_HINT) }
        </div>
    }
}

/// Save and discard buttons plus the save alerts.
///
/// "Discard Changes" stays disabled until the user starts editing; a
/// successful save leaves edit mode and disables it again.
fn build_save_controls(component: &DocumentWorkflowComponent, link: &Link) -> Html {
    let save = &component.workflow.save;
    let editing = component
        .workflow
        .review
        .as_ref()
        .is_some_and(|review| review.editing);

    html! {
        <>
            <div style="margin-top:16px;display:flex;gap:8px;">
                <button
                    class="outlined-btn"
                    disabled={save.in_flight}
                    onclick={link.callback(|_| Msg::Workflow(WorkflowMsg::SubmitFieldUpdate))}
                >
                    {
                        if save.in_flight {
                            busy_label("Saving...")
                        } else {
                            html! { {"Save Corrected Fields"} }
                        }
                    }
                </button>
                <button
                    class="text-btn"
                    disabled={save.in_flight || !editing}
                    onclick={link.callback(|_| Msg::Workflow(WorkflowMsg::RevertEdits))}
                >
                    {"Discard Changes"}
                </button>
            </div>
            { error_alert(save.error.as_ref()) }
            {
                match save.success {
                    Some(notice) => html! {
                        <div style={styles::alert("success")}>{ notice.message() }</div>
                    },
                    None => html! {},
                }
            }
        </>
    }
}

/// Card 3: band score inputs, the check button and the result.
fn build_eligibility_card(component: &DocumentWorkflowComponent, link: &Link) -> Html {
    let workflow = &component.workflow;
    let eligibility = &workflow.eligibility;

    html! {
        <div class="card" style={styles::CARD}>
            <h2>{"3. IELTS Scores & Eligibility"}</h2>
            <p style="color:#666;">{"Enter IELTS band scores (minimum 8.0 required in each band)."}</p>
            <div style={styles::ROW}>
                { for Band::ALL.iter().map(|band| build_band_input(component, *band, link)) }
            </div>
            <div style="margin-top:16px;">
                <button
                    class="primary-btn"
                    disabled={eligibility.in_flight}
                    onclick={link.callback(|_| Msg::Workflow(WorkflowMsg::SubmitEligibilityCheck))}
                >
                    {
                        if eligibility.in_flight {
                            busy_label("Checking...")
                        } else {
                            html! { {"Check Eligibility"} }
                        }
                    }
                </button>
            </div>
            { error_alert(eligibility.error.as_ref()) }
            {
                match &eligibility.result {
                    Some(result) => build_result(result),
                    None => html! {},
                }
            }
        </div>
    }
}

/// Number input for one IELTS band, with its advisory range warning.
/// The text is kept as typed and only coerced when the check is sent.
fn build_band_input(component: &DocumentWorkflowComponent, band: Band, link: &Link) -> Html {
    let bands = &component.workflow.bands;
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::Workflow(WorkflowMsg::SetBandScore {
            band,
            value: input.value(),
        })
    });

    html! {
        <div class="field" style={styles::FIELD}>
            <label for={band.key()}>{ band.label() }</label>
            <input
                id={band.key()}
                type="number"
                step="0.5"
                min={MIN_BAND_SCORE.to_string()}
                max={MAX_BAND_SCORE.to_string()}
                value={bands.get(band).to_string()}
                {oninput}
            />
            { hint(bands.warning(band), styles::WARNING_HINT) }
        </div>
    }
}

/// Result card: headline, then the reasons list or the all-clear line.
fn build_result(result: &EligibilityResult) -> Html {
    let (icon, color) = if result.eligible {
        ("check_circle", "#2e7d32")
    } else {
        ("cancel", "#d32f2f")
    };

    html! {
        <div class="eligibility-result">
            <h3>{"Eligibility Result"}</h3>
            <div style={styles::result_card(result.eligible)}>
                <div style="display:flex;align-items:center;margin-bottom:8px;">
                    <i class="material-icons" style={format!("color:{};margin-right:8px;", color)}>{ icon }</i>
                    <strong style="font-size:20px;">{ result.headline() }</strong>
                </div>
                {
                    if result.reasons.is_empty() {
                        html! { <p>{"No issues found. All criteria satisfied."}</p> }
                    } else {
                        html! {
                            <ul style="padding-left:24px;margin:0;">
                                { for result.reasons.iter().map(|reason| html! { <li>{ reason.clone() }</li> }) }
                            </ul>
                        }
                    }
                }
            </div>
        </div>
    }
}

/// Red alert for a phase error; nothing when the phase has no error.
fn error_alert(error: Option<&WorkflowError>) -> Html {
    match error {
        Some(error) => html! { <div class="alert" style={styles::alert("error")}>{ error.to_string() }</div> },
        None => html! {},
    }
}

fn hint(text: Option<String>, style: &'static str) -> Html {
    match text {
        Some(text) => html! { <span style={style}>{ text }</span> },
        None => html! {},
    }
}

/// Spinner plus the busy text shown inside a disabled button.
fn busy_label(label: &'static str) -> Html {
    html! {
        <>
            <span class="spin" style="display:inline-block;width:14px;height:14px;margin-right:8px;border:2px solid #ccc;border-top-color:#1976d2;border-radius:50%;animation:spin 1s linear infinite;vertical-align:middle;" />
            { label }
        </>
    }
}
