//! Markup templates, one per block type.
//!
//! Only the hero and footer read user text (title, headline, ctaText); the
//! other blocks carry fixed illustrative content and pick up the user's
//! colors through the stylesheet.

use crate::compiler::{Context, RenderContext};
use crate::escape::Html;
use pagex_model::{BlockType, PageSettings};

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "fas fa-rocket",
        title: "Rápido e Eficiente",
        description: "Nossa solução é otimizada para performance máxima.",
    },
    Feature {
        icon: "fas fa-lightbulb",
        title: "Inovador",
        description: "Tecnologia de ponta para resultados excepcionais.",
    },
    Feature {
        icon: "fas fa-shield-alt",
        title: "Confiável",
        description: "Segurança e estabilidade garantidas para seu negócio.",
    },
];

const TESTIMONIALS: [(&str, &str); 3] = [
    (
        "\"Esta solução transformou completamente meu negócio. Incrível!\"",
        "- João Silva, CEO da Empresa X",
    ),
    (
        "\"Simplesmente fantástico! A equipe adotou rapidamente e os resultados foram imediatos.\"",
        "- Maria Santos, Diretora de Marketing",
    ),
    (
        "\"O retorno sobre investimento foi evidente já no primeiro mês de uso.\"",
        "- Pedro Costa, Gerente de Projetos",
    ),
];

struct Plan {
    name: &'static str,
    price: &'static str,
    featured: bool,
    features: &'static [&'static str],
}

const PLANS: [Plan; 3] = [
    Plan {
        name: "Básico",
        price: "R$ 49",
        featured: false,
        features: &[
            "5 Páginas",
            "1GB de Armazenamento",
            "Suporte por Email",
            "Relatórios Básicos",
        ],
    },
    Plan {
        name: "Profissional",
        price: "R$ 99",
        featured: true,
        features: &[
            "20 Páginas",
            "5GB de Armazenamento",
            "Suporte Prioritário",
            "Relatórios Avançados",
            "SEO Básico",
        ],
    },
    Plan {
        name: "Empresarial",
        price: "R$ 199",
        featured: false,
        features: &[
            "Páginas Ilimitadas",
            "20GB de Armazenamento",
            "Suporte 24/7",
            "Relatórios Personalizados",
            "SEO Avançado",
        ],
    },
];

struct Project {
    image: &'static str,
    alt: &'static str,
    title: &'static str,
    description: &'static str,
}

const PROJECTS: [Project; 3] = [
    Project {
        image: "https://via.placeholder.com/400x300/4f46e5/ffffff?text=Projeto+1",
        alt: "Projeto 1",
        title: "Design de Interface",
        description: "UI/UX design para aplicativo mobile",
    },
    Project {
        image: "https://via.placeholder.com/400x300/10b981/ffffff?text=Projeto+2",
        alt: "Projeto 2",
        title: "Website Corporativo",
        description: "Site responsivo para empresa de tecnologia",
    },
    Project {
        image: "https://via.placeholder.com/400x300/f97316/ffffff?text=Projeto+3",
        alt: "Projeto 3",
        title: "Identidade Visual",
        description: "Branding completo para startup",
    },
];

const CONTACT_INFO: [(&str, &str, &str); 3] = [
    ("fas fa-map-marker-alt", "Endereço", "Av. Paulista, 1000, São Paulo - SP"),
    ("fas fa-phone", "Telefone", "(11) 99999-9999"),
    ("fas fa-envelope", "Email", "contato@empresa.com"),
];

struct FormField {
    id: &'static str,
    label: &'static str,
    /// `None` renders a textarea
    input_type: Option<&'static str>,
    error: &'static str,
}

const CONTACT_FIELDS: [FormField; 3] = [
    FormField {
        id: "contact-name",
        label: "Nome",
        input_type: Some("text"),
        error: "Por favor, insira seu nome.",
    },
    FormField {
        id: "contact-email",
        label: "Email",
        input_type: Some("email"),
        error: "Por favor, insira um email válido.",
    },
    FormField {
        id: "contact-message",
        label: "Mensagem",
        input_type: None,
        error: "Por favor, insira sua mensagem.",
    },
];

const SOCIAL_ICONS: [&str; 4] = [
    "fab fa-facebook-f",
    "fab fa-instagram",
    "fab fa-twitter",
    "fab fa-linkedin-in",
];

const FOOTER_COLUMNS: [(&str, [&str; 5]); 3] = [
    ("Links Rápidos", ["Início", "Sobre", "Serviços", "Portfólio", "Contato"]),
    (
        "Serviços",
        ["Web Design", "Desenvolvimento", "Marketing Digital", "SEO", "Branding"],
    ),
    (
        "Suporte",
        ["FAQ", "Termos de Uso", "Política de Privacidade", "Cookies", "Ajuda"],
    ),
];

/// Write the markup of one block
pub(crate) fn write_block(block_type: BlockType, settings: &PageSettings, ctx: &RenderContext, w: &mut Context) {
    match block_type {
        BlockType::Hero => write_hero(settings, w),
        BlockType::Features => write_features(w),
        BlockType::Testimonials => write_testimonials(w),
        BlockType::Pricing => write_pricing(w),
        BlockType::Portfolio => write_portfolio(w),
        BlockType::Contact => write_contact(w),
        BlockType::Cta => write_cta(w),
        BlockType::Footer => write_footer(settings, ctx, w),
    }
}

fn write_hero(settings: &PageSettings, w: &mut Context) {
    w.open("section", &[("class", "hero-block")]);
    w.element("h1", &[("class", "hero-title")], &Html::escape(&settings.title));
    w.element("p", &[("class", "hero-headline")], &Html::escape(&settings.headline));
    w.element(
        "a",
        &[("href", "#"), ("class", "cta-button")],
        &Html::escape(&settings.cta_text),
    );
    w.close("section");
}

fn write_features(w: &mut Context) {
    w.open("section", &[("class", "features-block")]);
    w.element("h2", &[("class", "features-title")], &Html::escape("Nossos Diferenciais"));
    w.open("div", &[("class", "features-grid")]);
    for feature in &FEATURES {
        w.open("div", &[("class", "feature-item")]);
        w.element("div", &[("class", "feature-icon")], &Html::icon(feature.icon));
        w.element("h3", &[("class", "feature-title")], &Html::escape(feature.title));
        w.element(
            "p",
            &[("class", "feature-description")],
            &Html::escape(feature.description),
        );
        w.close("div");
    }
    w.close("div");
    w.close("section");
}

fn write_testimonials(w: &mut Context) {
    w.open("section", &[("class", "testimonials-block")]);
    w.element(
        "h2",
        &[("class", "testimonials-title")],
        &Html::escape("O que nossos clientes dizem"),
    );
    w.open("div", &[("class", "testimonials-carousel")]);

    w.open("div", &[("class", "testimonials-track")]);
    for (text, author) in TESTIMONIALS {
        w.open("div", &[("class", "testimonial-item")]);
        w.element("p", &[("class", "testimonial-text")], &Html::escape(text));
        w.element("p", &[("class", "testimonial-author")], &Html::escape(author));
        w.close("div");
    }
    w.close("div");

    w.open("div", &[("class", "carousel-controls")]);
    w.element(
        "button",
        &[("type", "button"), ("class", "carousel-control carousel-prev")],
        &Html::icon("fas fa-chevron-left"),
    );
    w.element(
        "button",
        &[("type", "button"), ("class", "carousel-control carousel-next")],
        &Html::icon("fas fa-chevron-right"),
    );
    w.close("div");

    w.close("div");
    w.close("section");
}

fn write_pricing(w: &mut Context) {
    w.open("section", &[("class", "pricing-block")]);
    w.element("h2", &[("class", "pricing-title")], &Html::escape("Nossos Planos"));
    w.open("div", &[("class", "pricing-grid")]);
    for plan in &PLANS {
        let class = if plan.featured {
            "pricing-plan featured"
        } else {
            "pricing-plan"
        };
        w.open("div", &[("class", class)]);
        w.element("h3", &[("class", "plan-name")], &Html::escape(plan.name));
        w.element(
            "div",
            &[("class", "plan-price")],
            &(Html::escape(plan.price) + Html::trusted("<span>/mês</span>")),
        );
        w.open("ul", &[("class", "plan-features")]);
        for feature in plan.features {
            w.element("li", &[], &Html::escape(feature));
        }
        w.close("ul");
        w.element(
            "a",
            &[("href", "#"), ("class", "cta-button")],
            &Html::escape("Assinar Agora"),
        );
        w.close("div");
    }
    w.close("div");
    w.close("section");
}

fn write_portfolio(w: &mut Context) {
    w.open("section", &[("class", "portfolio-block")]);
    w.element("h2", &[("class", "portfolio-title")], &Html::escape("Nossos Trabalhos"));
    w.open("div", &[("class", "portfolio-grid")]);
    for project in &PROJECTS {
        w.open("div", &[("class", "portfolio-item")]);
        w.void(
            "img",
            &[
                ("src", project.image),
                ("alt", project.alt),
                ("class", "portfolio-image"),
            ],
        );
        w.open("div", &[("class", "portfolio-overlay")]);
        w.element("h3", &[("class", "portfolio-item-title")], &Html::escape(project.title));
        w.element(
            "p",
            &[("class", "portfolio-item-desc")],
            &Html::escape(project.description),
        );
        w.close("div");
        w.close("div");
    }
    w.close("div");
    w.close("section");
}

fn write_contact(w: &mut Context) {
    w.open("section", &[("class", "contact-block")]);
    w.element("h2", &[("class", "contact-title")], &Html::escape("Entre em Contato"));
    w.open("div", &[("class", "contact-container")]);

    w.open("div", &[("class", "contact-info")]);
    for (icon, heading, text) in CONTACT_INFO {
        w.open("div", &[("class", "contact-info-item")]);
        w.element("div", &[("class", "contact-icon")], &Html::icon(icon));
        w.open("div", &[("class", "contact-text")]);
        w.element("h4", &[], &Html::escape(heading));
        w.element("p", &[], &Html::escape(text));
        w.close("div");
        w.close("div");
    }
    w.close("div");

    w.open("form", &[("class", "contact-form"), ("novalidate", "")]);
    for field in &CONTACT_FIELDS {
        let error_id = format!("error-{}", field.id);
        w.open("div", &[("class", "form-group")]);
        w.element("label", &[("for", field.id)], &Html::escape(field.label));
        match field.input_type {
            Some(input_type) => {
                w.void("input", &[("type", input_type), ("id", field.id), ("required", "")]);
            }
            None => {
                w.element("textarea", &[("id", field.id), ("required", "")], &Html::empty());
            }
        }
        w.element(
            "div",
            &[("class", "form-error"), ("id", error_id.as_str())],
            &Html::escape(field.error),
        );
        w.close("div");
    }
    w.element(
        "button",
        &[("type", "submit"), ("class", "cta-button")],
        &Html::escape("Enviar Mensagem"),
    );
    w.element(
        "div",
        &[("class", "form-success")],
        &Html::escape("Sua mensagem foi enviada com sucesso!"),
    );
    w.close("form");

    w.close("div");
    w.close("section");
}

fn write_cta(w: &mut Context) {
    w.open("section", &[("class", "cta-block")]);
    w.element(
        "h2",
        &[("class", "cta-block-title")],
        &Html::escape("Pronto para começar?"),
    );
    w.element(
        "p",
        &[("class", "cta-block-text")],
        &Html::escape("Junte-se a milhares de clientes satisfeitos e leve seu negócio ao próximo nível."),
    );
    w.element(
        "a",
        &[("href", "#"), ("class", "cta-block-button")],
        &Html::escape("Começar Agora"),
    );
    w.close("section");
}

fn write_footer(settings: &PageSettings, ctx: &RenderContext, w: &mut Context) {
    w.open("footer", &[("class", "footer-block")]);
    w.open("div", &[("class", "footer-content")]);

    w.open("div", &[("class", "footer-about")]);
    w.element("div", &[("class", "footer-logo")], &Html::escape(&settings.title));
    w.element(
        "p",
        &[("class", "footer-desc")],
        &Html::escape(
            "Criamos soluções incríveis para transformar seu negócio e alcançar resultados excepcionais.",
        ),
    );
    w.open("div", &[("class", "social-links")]);
    for icon in SOCIAL_ICONS {
        w.element("a", &[("href", "#"), ("class", "social-link")], &Html::icon(icon));
    }
    w.close("div");
    w.close("div");

    for (heading, links) in &FOOTER_COLUMNS {
        w.open("div", &[("class", "footer-links-column")]);
        w.element("h3", &[("class", "footer-heading")], &Html::escape(heading));
        w.open("ul", &[("class", "footer-links")]);
        for link in links {
            w.element("li", &[], &Html::tag("a", &[("href", "#")], &Html::escape(link)));
        }
        w.close("ul");
        w.close("div");
    }

    w.close("div");

    w.open("div", &[("class", "footer-bottom")]);
    let copyright = Html::trusted("&copy; ")
        + Html::escape(&format!(
            "{} {}. Todos os direitos reservados.",
            ctx.year, settings.title
        ));
    w.element("p", &[], &copyright);
    w.close("div");

    w.close("footer");
}
