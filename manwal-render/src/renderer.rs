use crate::company::CompanyProfile;
use crate::format::{
    amount_or_not_specified, escape_html, format_day_month_year, or_dash, or_not_specified,
    CURRENCY,
};
use crate::tips::TRAVEL_TIPS;
use chrono::{DateTime, Utc};
use manwal_domain::{Document, DocumentBody, FlightDetails, InvoiceType, ReceiptDetails};

/// Print stylesheet: A4 portrait, 8mm margins, right-to-left Cairo layout.
const STYLE: &str = r#"
    @page { size: A4 portrait; margin: 8mm; }
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body {
      font-family: 'Cairo', sans-serif;
      background: #ffffff;
      color: #1f2937;
      font-size: 10px;
      line-height: 1.4;
      direction: rtl;
      text-align: right;
    }
    .invoice-container {
      max-width: 100%;
      margin: 0 auto;
      min-height: 100vh;
      display: flex;
      flex-direction: column;
      position: relative;
    }
    .watermark {
      position: absolute;
      top: 50%;
      left: 50%;
      transform: translate(-50%, -50%) rotate(-45deg);
      font-size: 120px;
      color: rgba(59, 130, 246, 0.03);
      font-weight: 900;
      z-index: 0;
      pointer-events: none;
    }
    .content-wrapper { position: relative; z-index: 1; flex: 1; }
    .header-section {
      padding: 16px 20px;
      margin: -8mm -8mm 12px -8mm;
      border-bottom: 2px solid #2563eb;
    }
    .header-content { display: flex; justify-content: space-between; align-items: center; }
    .company-section { display: flex; align-items: center; gap: 20px; }
    .company-logo {
      width: 40px;
      height: 40px;
      background: #2563eb;
      color: white;
      border-radius: 6px;
      display: flex;
      align-items: center;
      justify-content: center;
      font-size: 8px;
      font-weight: 800;
    }
    .company-info h1 { font-size: 16px; font-weight: 800; margin-bottom: 2px; }
    .company-subtitle { font-size: 10px; color: #6b7280; font-weight: 600; margin-bottom: 3px; }
    .company-contact { font-size: 8px; color: #9ca3af; line-height: 1.3; }
    .invoice-badge {
      background: #2563eb;
      padding: 8px 16px;
      border-radius: 6px;
      text-align: center;
      color: white;
    }
    .invoice-title { font-size: 16px; font-weight: 800; margin-bottom: 1px; }
    .invoice-subtitle { font-size: 8px; font-weight: 600; opacity: 0.9; }
    .content-main { flex: 1; padding: 0 4px; }
    .info-card {
      border: 1px solid #e5e7eb;
      border-radius: 6px;
      padding: 12px;
      margin-bottom: 12px;
    }
    .info-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 12px; margin-bottom: 12px; }
    .info-card h3 {
      font-size: 12px;
      font-weight: 700;
      margin-bottom: 10px;
      padding-bottom: 4px;
      border-bottom: 1px solid #2563eb;
    }
    .info-item {
      display: flex;
      justify-content: space-between;
      padding: 4px 0;
      border-bottom: 1px solid #f3f4f6;
      font-size: 9px;
    }
    .info-item:last-child { border-bottom: none; }
    .info-label { font-weight: 600; color: #374151; }
    .info-value { font-weight: 700; color: #1f2937; }
    .travelers-table {
      width: 100%;
      border-collapse: separate;
      border-spacing: 0;
      border-radius: 8px;
      overflow: hidden;
      border: 1px solid #e5e7eb;
    }
    .travelers-table thead tr { background: #2563eb; }
    .travelers-table th { color: white; padding: 8px 6px; font-weight: 700; font-size: 9px; text-align: center; }
    .travelers-table td { padding: 6px 4px; text-align: center; color: #374151; font-size: 8px; }
    .travelers-table td.row-number { font-weight: 700; background: #f8fafc; color: #2563eb; font-size: 9px; }
    .travelers-table td.traveler-name { font-weight: 600; color: #1f2937; }
    .travelers-table tbody tr:nth-child(even) { background: #f8fafc; }
    .details-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 6px; margin-top: 10px; }
    .detail-item {
      padding: 8px;
      border-radius: 6px;
      text-align: center;
      border: 1px solid #e2e8f0;
      border-right: 3px solid #2563eb;
    }
    .detail-label { font-size: 8px; color: #374151; font-weight: 700; margin-bottom: 3px; }
    .detail-value { font-size: 9px; color: #1f2937; font-weight: 600; }
    .message-box {
      border: 1px solid #e5e7eb;
      border-radius: 8px;
      padding: 12px;
      margin-top: 12px;
      font-size: 11px;
      color: #374151;
      line-height: 1.5;
    }
    .tips-section { border: 1px solid #e5e7eb; border-radius: 8px; padding: 12px; margin-bottom: 16px; }
    .tip-item {
      display: flex;
      align-items: flex-start;
      gap: 4px;
      margin-bottom: 4px;
      padding: 4px;
      border-radius: 3px;
      border: 1px solid #e5e7eb;
    }
    .tip-number {
      background: #2563eb;
      color: white;
      border-radius: 50%;
      width: 12px;
      height: 12px;
      display: flex;
      align-items: center;
      justify-content: center;
      font-size: 6px;
      font-weight: bold;
      flex-shrink: 0;
    }
    .tip-text { font-size: 7px; color: #374151; font-weight: 500; line-height: 1.2; }
    .total-section {
      margin: 12px 0;
      text-align: center;
      background: linear-gradient(135deg, #1e3a8a 0%, #2563eb 50%, #60a5fa 100%);
      padding: 12px;
      border-radius: 8px;
      color: white;
    }
    .total-amount { font-size: 21px; font-weight: 900; margin-bottom: 4px; line-height: 1; }
    .total-label { font-size: 8px; font-weight: 700; letter-spacing: 0.5px; }
    .signature-text { font-size: 6px; margin-top: 6px; font-weight: 600; }
    .footer-section {
      background: #f8fafc;
      padding: 12px;
      margin: 12px -8mm -8mm -8mm;
      text-align: center;
      border-top: 2px solid #2563eb;
    }
    .footer-title { font-size: 12px; font-weight: 800; margin-bottom: 6px; }
    .footer-info { font-size: 8px; color: #6b7280; line-height: 1.4; font-weight: 500; }
    @media print {
      body { margin: 0; padding: 0; font-size: 9px; }
      .watermark { display: none; }
      .header-section { margin: 0 0 8px 0; padding: 12px 16px; }
      .footer-section { margin: 8px 0 0 0; padding: 8px; }
      * { -webkit-print-color-adjust: exact !important; color-adjust: exact !important; }
    }
"#;

fn title_ar(invoice_type: InvoiceType) -> &'static str {
    match invoice_type {
        InvoiceType::Invoice => "فاتورة",
        InvoiceType::Receipt => "وصل استلام",
    }
}

fn title_en(invoice_type: InvoiceType) -> &'static str {
    match invoice_type {
        InvoiceType::Invoice => "INVOICE",
        InvoiceType::Receipt => "RECEIPT",
    }
}

fn watermark(invoice_type: InvoiceType) -> &'static str {
    match invoice_type {
        InvoiceType::Invoice => "فاتورة",
        InvoiceType::Receipt => "وصل",
    }
}

/// The short noun used in "معلومات ..." and "رقم ..." labels
fn document_word(invoice_type: InvoiceType) -> &'static str {
    match invoice_type {
        InvoiceType::Invoice => "الفاتورة",
        InvoiceType::Receipt => "الوصل",
    }
}

fn total_label(invoice_type: InvoiceType) -> &'static str {
    match invoice_type {
        InvoiceType::Invoice => "المجموع الإجمالي",
        InvoiceType::Receipt => "إجمالي المبلغ",
    }
}

/// Turns a Document into the complete printable HTML artifact.
///
/// Rendering is deterministic given the document and the instant passed to
/// `render_at`, and never mutates the document; the embedded date is the
/// only input taken from the clock.
#[derive(Debug, Clone, Default)]
pub struct DocumentRenderer {
    company: CompanyProfile,
}

impl DocumentRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_company(company: CompanyProfile) -> Self {
        Self { company }
    }

    /// Render with the current instant as the printed date
    pub fn render(&self, document: &Document) -> String {
        self.render_at(document, Utc::now())
    }

    pub fn render_at(&self, document: &Document, at: DateTime<Utc>) -> String {
        let company = &self.company;
        let invoice_type = document.invoice_type;

        let details_block = match document.body() {
            DocumentBody::Invoice(flight) => self.flight_details(flight),
            DocumentBody::Receipt(receipt) => self.receipt_details(receipt),
        };

        format!(
            r#"<!DOCTYPE html>
<html dir="rtl" lang="ar">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title} - {number}</title>
<link href="https://fonts.googleapis.com/css2?family=Cairo:wght@400;500;600;700;800;900&display=swap" rel="stylesheet">
<style>{style}</style>
</head>
<body>
<div class="invoice-container">
  <div class="watermark">{watermark}</div>
  <div class="content-wrapper">
    <div class="header-section">
      <div class="header-content">
        <div class="company-section">
          <div class="company-logo">{logo}</div>
          <div class="company-info">
            <h1>{company_ar}</h1>
            <div class="company-subtitle">{company_en}</div>
            <div class="company-contact">📍 {address}<br/>📞 {support_phone} • ✉️ {email}</div>
          </div>
        </div>
        <div class="invoice-badge">
          <div class="invoice-title">{title}</div>
          <div class="invoice-subtitle">{title_en}</div>
        </div>
      </div>
    </div>
    <div class="content-main">
      <div class="info-grid">
        <div class="info-card">
          <h3>👤 بيانات العميل</h3>
          <div class="info-item"><span class="info-label">📝 الاسم:</span><span class="info-value">{customer_name}</span></div>
          <div class="info-item"><span class="info-label">📞 الهاتف:</span><span class="info-value">{customer_phone}</span></div>
          <div class="info-item"><span class="info-label">📍 العنوان:</span><span class="info-value">{customer_address}</span></div>
        </div>
        <div class="info-card">
          <h3>📋 معلومات {word}</h3>
          <div class="info-item"><span class="info-label">🔢 رقم {word}:</span><span class="info-value">{number}</span></div>
          <div class="info-item"><span class="info-label">📅 التاريخ:</span><span class="info-value">{date}</span></div>
          <div class="info-item"><span class="info-label">👨‍💼 المسؤول:</span><span class="info-value">{agent}</span></div>
        </div>
      </div>
      <div class="info-card">
        <h3>👥 بيانات المسافرين</h3>
        <table class="travelers-table">
          <thead>
            <tr>
              <th style="width: 10%;">🔢 م</th>
              <th style="width: 35%;">👤 اسم المسافر</th>
              <th style="width: 15%;">🎂 العمر</th>
              <th style="width: 20%;">💼 وزن الحقائب</th>
              <th style="width: 20%;">✈️ درجة السفر</th>
            </tr>
          </thead>
          <tbody>
{traveler_rows}          </tbody>
        </table>
      </div>
{details_block}{tips}{notes}      <div class="total-section">
        <div class="total-amount">{price} {currency}</div>
        <div class="total-label">{total_label}</div>
        <div class="signature-text">التوقيع: _________________</div>
      </div>
    </div>
  </div>
  <div class="footer-section">
    <div class="footer-title">شكراً لاختياركم {company_ar}</div>
    <div class="footer-info">
      العنوان: {address} • الهاتف: {phone}<br/>
      البريد الإلكتروني: {email} • الموقع: {website}<br/>
      {tagline}
    </div>
  </div>
</div>
<script>
  window.onload = function() {{
    setTimeout(() => {{
      window.print();
      setTimeout(() => window.close(), 100);
    }}, 500);
  }}
</script>
</body>
</html>
"#,
            title = title_ar(invoice_type),
            title_en = title_en(invoice_type),
            watermark = watermark(invoice_type),
            word = document_word(invoice_type),
            number = escape_html(&document.invoice_number),
            style = STYLE,
            logo = escape_html(&company.logo_text),
            company_ar = escape_html(&company.name_ar),
            company_en = escape_html(&company.name_en),
            address = escape_html(&company.address),
            phone = escape_html(&company.phone),
            support_phone = escape_html(&company.support_phone),
            email = escape_html(&company.email),
            website = escape_html(&company.website),
            agent = escape_html(&company.agent),
            tagline = escape_html(&company.tagline),
            customer_name = or_not_specified(&document.customer_name),
            customer_phone = or_not_specified(&document.customer_phone),
            customer_address = or_not_specified(&document.customer_address),
            date = format_day_month_year(at),
            traveler_rows = self.traveler_rows(document),
            details_block = details_block,
            tips = self.tips_block(),
            notes = self.notes_block(&document.notes),
            price = escape_html(&document.price),
            currency = CURRENCY,
            total_label = total_label(invoice_type),
        )
    }

    fn traveler_rows(&self, document: &Document) -> String {
        let mut rows = String::new();
        for (index, traveler) in document.travelers.iter().enumerate() {
            rows.push_str(&format!(
                "            <tr>\
                 <td class=\"row-number\">{number}</td>\
                 <td class=\"traveler-name\">{name}</td>\
                 <td>{age}</td>\
                 <td>{luggage}</td>\
                 <td>{seat}</td>\
                 </tr>\n",
                number = index + 1,
                name = or_not_specified(&traveler.name),
                age = or_dash(&traveler.age),
                luggage = or_dash(&traveler.luggage_weight),
                seat = traveler.seat_class.label(),
            ));
        }
        rows
    }

    fn flight_details(&self, flight: &FlightDetails) -> String {
        let fields = [
            ("📅 تاريخ المغادرة", &flight.departure_date),
            ("📅 تاريخ العودة", &flight.return_date),
            ("✈️ رقم الرحلة", &flight.flight_number),
            ("🛫 من", &flight.departure_airport),
            ("🛬 إلى", &flight.arrival_airport),
            ("🏢 شركة الطيران", &flight.airline),
        ];

        let mut items = String::new();
        for (label, value) in fields {
            items.push_str(&format!(
                "          <div class=\"detail-item\">\
                 <div class=\"detail-label\">{label}</div>\
                 <div class=\"detail-value\">{value}</div>\
                 </div>\n",
                label = label,
                value = or_not_specified(value),
            ));
        }

        format!(
            "      <div class=\"info-card\">\n        <h3>✈️ تفاصيل الرحلة</h3>\n        <div class=\"details-grid\">\n{items}        </div>\n      </div>\n",
        )
    }

    fn receipt_details(&self, receipt: &ReceiptDetails) -> String {
        let message = if receipt.receipt_message.is_empty() {
            String::new()
        } else {
            format!(
                "        <div class=\"message-box\"><strong>رسالة الاستلام:</strong><br/>{}</div>\n",
                escape_html(&receipt.receipt_message)
            )
        };

        format!(
            "      <div class=\"info-card\">\n        <h3>💰 تفاصيل الاستلام</h3>\n        <div class=\"details-grid\">\n          <div class=\"detail-item\">\
             <div class=\"detail-label\">المبلغ المستلم</div>\
             <div class=\"detail-value\">{received}</div>\
             </div>\n          <div class=\"detail-item\">\
             <div class=\"detail-label\">المبلغ المتبقي</div>\
             <div class=\"detail-value\">{remaining}</div>\
             </div>\n        </div>\n{message}      </div>\n",
            received = amount_or_not_specified(&receipt.amount_received),
            remaining = amount_or_not_specified(&receipt.remaining_amount),
            message = message,
        )
    }

    fn tips_block(&self) -> String {
        let mut items = String::new();
        for (index, tip) in TRAVEL_TIPS.iter().enumerate() {
            items.push_str(&format!(
                "        <div class=\"tip-item\"><div class=\"tip-number\">{}</div><span class=\"tip-text\">{}</span></div>\n",
                index + 1,
                tip,
            ));
        }
        format!(
            "      <div class=\"tips-section\">\n        <h3>💡 معلومات مهمة للمسافر</h3>\n{items}      </div>\n",
        )
    }

    fn notes_block(&self, notes: &str) -> String {
        if notes.is_empty() {
            return String::new();
        }
        format!(
            "      <div class=\"info-card\">\n        <h3>📝 ملاحظات إضافية</h3>\n        <div class=\"message-box\">{}</div>\n      </div>\n",
            escape_html(notes)
        )
    }
}
