use crate::models::{Invoice, MailMessage};
use crate::services::mailer::Mailer;

pub fn compose_invoice(invoice: &Invoice, from: &str) -> MailMessage {
    let text = format!(
        "Thank you for your booking!\n\
         \n\
         Service: {service}\n\
         Duration: {duration} hours\n\
         Location: {area}, {city}\n\
         Total Cost: ${cost}\n\
         \n\
         Status: Pending\n",
        service = invoice.service_name,
        duration = invoice.duration,
        area = invoice.location.area,
        city = invoice.location.city,
        cost = invoice.total_cost,
    );

    MailMessage {
        from: from.to_string(),
        to: invoice.user_email.clone(),
        subject: format!("Invoice for {} - Care.xyz", invoice.service_name),
        text,
    }
}

/// Composes the invoice mail and hands it to `mailer`.
pub async fn send_invoice(mailer: &dyn Mailer, from: &str, invoice: &Invoice) -> anyhow::Result<()> {
    let message = compose_invoice(invoice, from);
    mailer.send(&message).await
}
