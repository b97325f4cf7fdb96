//! Fixed-label text summary of a completed intake.

use {atende_config::HandoffConfig, serde::Serialize};

/// The five collected values, in output order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub request_type: String,
    pub message: String,
}

/// Render the summary block sent through the messaging link.
///
/// Label order is fixed: name, e-mail, phone, request type, then the
/// free-form message as its own section, framed by the branded header and
/// the signature footer.
pub fn format_summary(request: &ContactRequest, cfg: &HandoffConfig) -> String {
    format!(
        "*SOLICITAÇÃO - {label}*\n\n\
         *Nome:* {name}\n\
         *E-mail:* {email}\n\
         *Telefone:* {phone}\n\
         *Tipo de Solicitação:* {request_type}\n\n\
         *Mensagem:*\n{message}\n\n\
         _{signature}_",
        label = cfg.site_label,
        name = request.name,
        email = request.email,
        phone = request.phone,
        request_type = request.request_type,
        message = request.message,
        signature = cfg.signature,
    )
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ContactRequest {
        ContactRequest {
            name: "Maria Silva".into(),
            email: "maria@example.com".into(),
            phone: "(83) 99319-3241".into(),
            request_type: "Orçamento".into(),
            message: "Preciso de um orçamento para revisão de TCC.".into(),
        }
    }

    #[test]
    fn labels_appear_in_fixed_order() {
        let text = format_summary(&sample(), &HandoffConfig::default());
        let positions: Vec<usize> = [
            "*Nome:* Maria Silva",
            "*E-mail:* maria@example.com",
            "*Telefone:* (83) 99319-3241",
            "*Tipo de Solicitação:* Orçamento",
            "*Mensagem:*\nPreciso de um orçamento para revisão de TCC.",
        ]
        .iter()
        .map(|needle| text.find(needle).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn header_and_signature_come_from_config() {
        let cfg = HandoffConfig {
            site_label: "MINHA LOJA".into(),
            signature: "enviado pelo site".into(),
            ..HandoffConfig::default()
        };
        let text = format_summary(&sample(), &cfg);
        assert!(text.starts_with("*SOLICITAÇÃO - MINHA LOJA*"));
        assert!(text.ends_with("_enviado pelo site_"));
    }
}
