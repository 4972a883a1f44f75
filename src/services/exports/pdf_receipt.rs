//! 주문 영수증 PDF (A4 가로)
//!
//! 템플릿 PDF(`RECEIPT_TEMPLATE_PATH`) 첫 페이지 위에 수신인, 발행일, 금액을 겹쳐 씁니다.
//! 문자열 레이어는 printpdf로 그린 뒤 lopdf로 템플릿 페이지에 Form XObject로 붙입니다.
//!
//! 좌표는 페이지 좌상단 기준 포인트 단위로 정의하고, 출력 시 PDF 좌표계(좌하단 기준, mm)로 변환합니다.
//! 일본어 글리프를 위해 `PDF_FONT_PATH`의 TTF 폰트를 사용합니다.

use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};
use printpdf::{Mm, PdfDocument};

use super::ensure_dir;
use crate::domain::entities::{order, user};
use crate::errors::{AppError, AppResult, ErrorContext};
use crate::utils::string_utils::{file_timestamp, format_price, to_wareki};

/// A4 가로 (pt)
const PAGE_WIDTH_PT: f32 = 842.0;
const PAGE_HEIGHT_PT: f32 = 595.0;
const MM_PER_PT: f32 = 0.352_778;

/// 발행일은 일본 시간 기준
const JST_OFFSET_SECONDS: i32 = 9 * 3600;

/// 템플릿 페이지 리소스에 등록되는 오버레이 이름
const OVERLAY_NAME: &str = "ReceiptOverlay";

/// 영수증에 배치되는 문자열 하나
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptText {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

impl ReceiptText {
    fn new(text: impl Into<String>, x: f32, y: f32, size: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            size,
        }
    }

    /// 좌상단 기준 pt → PDF 좌표(mm). 텍스트 상단이 `y`에 오도록 글자 크기만큼 내립니다.
    fn position_mm(&self) -> (Mm, Mm) {
        let baseline = PAGE_HEIGHT_PT - self.y - self.size;
        (Mm(self.x * MM_PER_PT), Mm(baseline * MM_PER_PT))
    }
}

/// UTC 시각의 일본 날짜
pub fn issued_date(at: &DateTime<Utc>) -> NaiveDate {
    match FixedOffset::east_opt(JST_OFFSET_SECONDS) {
        Some(jst) => at.with_timezone(&jst).date_naive(),
        None => at.date_naive(),
    }
}

/// 수신인(성+이름), 발행일(연호), 금액 배치
pub fn receipt_layout(order: &order::Model, user: &user::Model) -> Vec<ReceiptText> {
    let issued = issued_date(&order.created_at);
    let era_year = to_wareki(issued)
        .map(|w| w.year.to_string())
        .unwrap_or_else(|| issued.year().to_string());

    vec![
        ReceiptText::new(format!("{}{}", user.last_name, user.first_name), 300.0, 140.0, 28.0),
        ReceiptText::new(era_year, 600.0, 100.0, 15.0),
        ReceiptText::new(issued.month().to_string(), 635.0, 100.0, 15.0),
        ReceiptText::new(issued.day().to_string(), 676.0, 100.0, 15.0),
        ReceiptText::new(format!("¥{}-", format_price(order.total_price)), 280.0, 200.0, 28.0),
    ]
}

/// `{assets}/pdf/{order_id}_{YYYYMMDDhhmmss}.pdf`
pub fn receipt_path(assets_dir: &Path, order_id: &str, at: &DateTime<Utc>) -> PathBuf {
    assets_dir
        .join("pdf")
        .join(format!("{}_{}.pdf", order_id, file_timestamp(at)))
}

/// 문자열만 있는 투명 페이지를 그려 바이트열로 돌려줍니다.
fn render_overlay(font_path: &Path, order: &order::Model, user: &user::Model) -> AppResult<Vec<u8>> {
    let font_file = File::open(font_path).map_err(|e| {
        AppError::InternalError(format!("폰트 파일을 열 수 없습니다 {}: {}", font_path.display(), e))
    })?;

    let (doc, page, layer) = PdfDocument::new(
        format!("receipt {}", order.id),
        Mm(PAGE_WIDTH_PT * MM_PER_PT),
        Mm(PAGE_HEIGHT_PT * MM_PER_PT),
        "receipt",
    );
    let font = doc.add_external_font(font_file).context("폰트 로드 실패")?;
    let layer = doc.get_page(page).get_layer(layer);

    for item in receipt_layout(order, user) {
        let (x, y) = item.position_mm();
        layer.use_text(item.text.clone(), item.size, x, y, &font);
    }

    doc.save_to_bytes().context("PDF 직렬화 실패")
}

fn first_page(doc: &Document) -> AppResult<lopdf::ObjectId> {
    doc.get_pages()
        .get(&1)
        .copied()
        .ok_or_else(|| AppError::InternalError("PDF에 페이지가 없습니다".to_string()))
}

/// 페이지에 적용되는 리소스 사전 (상속 포함)의 복사본
fn page_resources(doc: &Document, page_id: lopdf::ObjectId) -> Dictionary {
    let (inline, inherited) = doc.get_page_resources(page_id);
    if let Some(dict) = inline {
        return dict.clone();
    }
    inherited
        .first()
        .and_then(|id| doc.get_dictionary(*id).ok())
        .cloned()
        .unwrap_or_default()
}

fn resolve_dict(doc: &Document, object: &Object) -> Dictionary {
    match object {
        Object::Dictionary(dict) => dict.clone(),
        Object::Reference(id) => doc.get_dictionary(*id).cloned().unwrap_or_default(),
        _ => Dictionary::new(),
    }
}

/// `overlay` 첫 페이지를 `template` 첫 페이지 위에 겹칩니다.
///
/// 오버레이는 자체 리소스를 가진 Form XObject가 되므로 템플릿의 폰트 이름과 충돌하지 않습니다.
/// 템플릿 콘텐츠는 `q`/`Q`로 감싸 그래픽 상태가 오버레이에 새지 않게 합니다.
pub fn stamp_overlay(template: &mut Document, mut overlay: Document) -> AppResult<()> {
    overlay.renumber_objects_with(template.max_id + 1);
    template.max_id = template.max_id.max(overlay.max_id);

    let overlay_page = first_page(&overlay)?;
    let content = overlay.get_page_content(overlay_page).context("오버레이 읽기 실패")?;
    let overlay_resources = overlay
        .get_dictionary(overlay_page)
        .and_then(|page| page.get(b"Resources"))
        .cloned()
        .unwrap_or_else(|_| Object::Dictionary(Dictionary::new()));

    template.objects.extend(overlay.objects);

    let form_id = template.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Form",
            "BBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(PAGE_WIDTH_PT),
                Object::Real(PAGE_HEIGHT_PT),
            ],
            "Resources" => overlay_resources,
        },
        content,
    ));

    let page_id = first_page(template)?;
    let mut resources = page_resources(template, page_id);
    let mut xobjects = resources
        .get(b"XObject")
        .map(|object| resolve_dict(template, object))
        .unwrap_or_default();
    xobjects.set(OVERLAY_NAME, Object::Reference(form_id));
    resources.set("XObject", Object::Dictionary(xobjects));

    let existing = template.get_page_contents(page_id);
    let save_state = template.add_object(Stream::new(Dictionary::new(), b"q\n".to_vec()));
    let draw_overlay = template.add_object(Stream::new(
        Dictionary::new(),
        format!("Q\nq /{} Do Q\n", OVERLAY_NAME).into_bytes(),
    ));

    let mut contents = vec![Object::Reference(save_state)];
    contents.extend(existing.into_iter().map(Object::Reference));
    contents.push(Object::Reference(draw_overlay));

    let page = template
        .get_object_mut(page_id)
        .and_then(Object::as_dict_mut)
        .context("템플릿 페이지 수정 실패")?;
    page.set("Resources", Object::Dictionary(resources));
    page.set("Contents", Object::Array(contents));

    Ok(())
}

pub fn render_receipt(
    template_path: &Path,
    font_path: &Path,
    assets_dir: &Path,
    order: &order::Model,
    user: &user::Model,
) -> AppResult<PathBuf> {
    let overlay_bytes = render_overlay(font_path, order, user)?;

    let mut template = Document::load(template_path)
        .with_context(|| format!("템플릿 PDF를 열 수 없습니다 {}", template_path.display()))?;
    let overlay = Document::load_mem(&overlay_bytes).context("오버레이 PDF 해석 실패")?;
    stamp_overlay(&mut template, overlay)?;

    let path = receipt_path(assets_dir, &order.id, &Utc::now());
    if let Some(dir) = path.parent() {
        ensure_dir(dir)?;
    }
    template
        .save(&path)
        .with_context(|| format!("PDF 저장 실패 {}", path.display()))?;

    log::info!("✅ 영수증 PDF 출력: {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use printpdf::BuiltinFont;

    fn fixtures() -> (order::Model, user::Model) {
        let at = Utc.with_ymd_and_hms(2022, 3, 15, 0, 0, 0).unwrap();
        let order = order::Model {
            id: "order-1".to_string(),
            user_id: "user-1".to_string(),
            quantity: 3,
            total_price: 1234567,
            order_status: "new".to_string(),
            remarks: String::new(),
            created_at: at,
            updated_at: at,
        };
        let user = user::Model {
            id: "user-1".to_string(),
            first_name: "太郎".to_string(),
            last_name: "山田".to_string(),
            image: String::new(),
            age: 30,
            email: "taro@example.com".to_string(),
            password: String::new(),
            created_at: at,
            updated_at: at,
        };
        (order, user)
    }

    fn builtin_font_pdf(text: &str) -> Vec<u8> {
        let (doc, page, layer) = PdfDocument::new("t", Mm(297.0), Mm(210.0), "layer");
        let font = doc.add_builtin_font(BuiltinFont::Helvetica).unwrap();
        doc.get_page(page)
            .get_layer(layer)
            .use_text(text, 12.0, Mm(10.0), Mm(10.0), &font);
        doc.save_to_bytes().unwrap()
    }

    #[test]
    fn test_receipt_layout() {
        let (order, user) = fixtures();
        let layout = receipt_layout(&order, &user);

        let texts: Vec<&str> = layout.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["山田太郎", "4", "3", "15", "¥1,234,567-"]);
        assert_eq!(layout[0], ReceiptText::new("山田太郎", 300.0, 140.0, 28.0));
    }

    #[test]
    fn test_issued_date_uses_japan_time() {
        // 2022-03-31 20:00 UTC = 2022-04-01 05:00 JST
        let (mut order, user) = fixtures();
        order.created_at = Utc.with_ymd_and_hms(2022, 3, 31, 20, 0, 0).unwrap();

        assert_eq!(issued_date(&order.created_at), NaiveDate::from_ymd_opt(2022, 4, 1).unwrap());
        let texts: Vec<String> = receipt_layout(&order, &user).into_iter().map(|t| t.text).collect();
        assert_eq!(texts[2], "4");
        assert_eq!(texts[3], "1");
    }

    #[test]
    fn test_stamp_overlay_keeps_template_content() {
        let mut template = Document::load_mem(&builtin_font_pdf("TEMPLATE")).unwrap();
        let overlay = Document::load_mem(&builtin_font_pdf("OVERLAY")).unwrap();
        let page_id = first_page(&template).unwrap();
        let before = template.get_page_contents(page_id).len();

        stamp_overlay(&mut template, overlay).unwrap();

        assert_eq!(template.get_pages().len(), 1);
        assert_eq!(template.get_page_contents(page_id).len(), before + 2);

        let resources = page_resources(&template, page_id);
        let xobjects = resolve_dict(&template, resources.get(b"XObject").unwrap());
        let form_id = xobjects.get(OVERLAY_NAME.as_bytes()).unwrap().as_reference().unwrap();
        let form = template.get_object(form_id).unwrap().as_stream().unwrap();
        assert!(String::from_utf8_lossy(&form.decompressed_content().unwrap_or(form.content.clone()))
            .contains("OVERLAY"));

        let mut bytes = Vec::new();
        template.save_to(&mut bytes).unwrap();
        assert_eq!(Document::load_mem(&bytes).unwrap().get_pages().len(), 1);
    }

    #[test]
    fn test_missing_font_is_internal_error() {
        let (order, user) = fixtures();
        let dir = tempfile::tempdir().unwrap();

        let result = render_receipt(
            &dir.path().join("template.pdf"),
            &dir.path().join("missing.ttf"),
            dir.path(),
            &order,
            &user,
        );
        assert!(matches!(result, Err(AppError::InternalError(_))));
    }

    #[test]
    fn test_receipt_path() {
        let at = Utc.with_ymd_and_hms(2022, 3, 15, 10, 20, 30).unwrap();
        assert_eq!(
            receipt_path(Path::new("assets"), "order-1", &at),
            PathBuf::from("assets/pdf/order-1_20220315102030.pdf")
        );
    }
}
