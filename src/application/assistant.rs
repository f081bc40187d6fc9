//! Assistant gateway - bridges the local transcript to the provider.
//!
//! The gateway is stateless: each call receives the full prior history
//! and the new message. Provider failures never reach the caller; they
//! are logged for operators and replaced with a fixed fallback
//! sentence, so the conversation can always continue.

use std::sync::Arc;

use crate::ports::{AssistantProvider, ChatRequest, ChatTurn};

/// Fixed persona and ground rules for the concierge.
const SYSTEM_INSTRUCTION: &str = "\
Você é a \"Indaiá Assistente\", uma planejadora de casamentos virtual especializada e elegante da empresa \"Indaiá Eventos\".
Seu tom é profissional, acolhedor, romântico e sofisticado.
Você está falando com um casal que já contratou o espaço.

Informações sobre a Indaiá Eventos:
- Especializada em casamentos em Florianópolis e região.
- Oferece gastronomia de alta qualidade (Buffet).
- Possui vistas deslumbrantes e espaços sofisticados.
- Valoriza a personalização e o sonho dos noivos.

Suas funções:
1. Dar dicas de etiqueta de casamento.
2. Sugerir combinações de cardápio e bebidas baseadas no estilo Indaiá.
3. Ajudar com ideias de decoração e paletas de cores.
4. Acalmar os noivos em momentos de estresse.
5. Responder dúvidas sobre organização financeira (mas não invente dados da conta deles, dê dicas gerais).

Se perguntarem sobre preços específicos de contratos antigos ou dados sensíveis da empresa que você não sabe, sugira gentilmente que entrem em contato com o consultor comercial da Indaiá.

Mantenha as respostas concisas, formatadas com Markdown (use tópicos) e sempre finalize com uma frase encorajadora.";

/// Reply shown when the provider call fails.
pub const FALLBACK_REPLY: &str =
    "No momento estou indisponível para consultas. Por favor, tente novamente mais tarde.";

/// Reply shown when the provider answered with no text at all.
pub const RETRY_REPLY: &str = "Desculpe, tive um pequeno contratempo. Poderia repetir?";

/// Default sampling temperature for concierge replies.
const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Stateless bridge between the transcript and the provider.
pub struct AssistantGateway {
    provider: Arc<dyn AssistantProvider>,
    temperature: f32,
}

impl AssistantGateway {
    /// Creates a gateway over the given provider.
    pub fn new(provider: Arc<dyn AssistantProvider>) -> Self {
        Self {
            provider,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Overrides the sampling temperature (from configuration).
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Produces the assistant's reply to `new_message` given the prior
    /// transcript, oldest turn first. `new_message` must not already be
    /// part of `history`.
    ///
    /// Never fails: provider errors are logged and degrade to
    /// [`FALLBACK_REPLY`]; an empty reply degrades to [`RETRY_REPLY`].
    pub async fn converse(&self, history: &[ChatTurn], new_message: &str) -> String {
        let request = ChatRequest::new()
            .with_system_instruction(SYSTEM_INSTRUCTION)
            .with_turns(history.iter().cloned())
            .with_turn(ChatTurn::user(new_message))
            .with_temperature(self.temperature);

        match self.provider.generate(request).await {
            Ok(reply) if reply.text.trim().is_empty() => RETRY_REPLY.to_string(),
            Ok(reply) => reply.text,
            Err(error) => {
                tracing::error!(
                    provider = %self.provider.provider_info().name,
                    %error,
                    "assistant provider call failed"
                );
                FALLBACK_REPLY.to_string()
            }
        }
    }
}
