//! Localized site copy.
//!
//! Strings are stored raw; HTML escaping is done by the templates.
//! Placeholders use `{name}` and are filled with [`fill`].

use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone)]
pub struct MetaStrings {
    pub site_name: &'static str,
    pub default_title: &'static str,
    pub description: &'static str,
    /// Placeholders: {title}
    pub title_template: &'static str,
    pub project_not_found_title: &'static str,
    pub project_default_description: &'static str,
}

#[derive(Debug, Clone)]
pub struct NavStrings {
    pub home: &'static str,
    pub about: &'static str,
    pub services: &'static str,
    pub projects: &'static str,
    pub contact: &'static str,
    pub get_quote: &'static str,
    pub language: &'static str,
}

#[derive(Debug, Clone)]
pub struct HomeStrings {
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub hero_cta: &'static str,
    /// Placeholders: {phone}
    pub hero_call: &'static str,
    pub trust_licensed: &'static str,
    pub trust_insured: &'static str,
    pub trust_years: &'static str,
    pub trust_emergency: &'static str,
    pub services_title: &'static str,
    pub services_subtitle: &'static str,
    pub roofing_title: &'static str,
    pub roofing_text: &'static str,
    pub siding_title: &'static str,
    pub siding_text: &'static str,
    pub gutters_title: &'static str,
    pub gutters_text: &'static str,
    pub insurance_title: &'static str,
    pub insurance_text: &'static str,
    pub insurance_cta: &'static str,
}

#[derive(Debug, Clone)]
pub struct FeaturedStrings {
    pub section_label: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub view_all: &'static str,
    pub project_preview: &'static str,
    pub empty: &'static str,
    pub modern_residential: &'static str,
    pub commercial_roofing: &'static str,
    pub luxury_siding: &'static str,
}

#[derive(Debug, Clone)]
pub struct ServicesStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub roofing_details: &'static str,
    pub siding_details: &'static str,
    pub gutters_details: &'static str,
    pub insurance_details: &'static str,
    pub cta_title: &'static str,
    pub cta_button: &'static str,
}

#[derive(Debug, Clone)]
pub struct AboutStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub story_title: &'static str,
    pub story_text: &'static str,
    pub values_title: &'static str,
    pub value_quality: &'static str,
    pub value_integrity: &'static str,
    pub value_safety: &'static str,
    pub cta_button: &'static str,
}

#[derive(Debug, Clone)]
pub struct ProjectsStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub filter_all: &'static str,
    pub empty_filtered: &'static str,
    pub empty: &'static str,
    pub view_project: &'static str,
    pub no_image: &'static str,
}

#[derive(Debug, Clone)]
pub struct ProjectDetailStrings {
    pub back_to_projects: &'static str,
    pub project_overview: &'static str,
    pub project_gallery: &'static str,
    pub project_image: &'static str,
    pub project_details: &'static str,
    pub location: &'static str,
    pub completed: &'static str,
    pub services: &'static str,
    pub cta_title: &'static str,
    pub cta_text: &'static str,
    pub cta_button: &'static str,
    /// Placeholders: {title}, {index}
    pub gallery_image_alt: &'static str,
}

#[derive(Debug, Clone)]
pub struct ContactStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub required: &'static str,
    pub form_name: &'static str,
    pub form_name_placeholder: &'static str,
    pub form_email: &'static str,
    pub form_email_placeholder: &'static str,
    pub form_phone: &'static str,
    pub form_phone_placeholder: &'static str,
    pub form_service: &'static str,
    pub form_select_service: &'static str,
    pub service_roofing: &'static str,
    pub service_siding: &'static str,
    pub service_gutters: &'static str,
    pub service_insurance: &'static str,
    pub service_other: &'static str,
    pub form_message: &'static str,
    pub form_message_placeholder: &'static str,
    pub submit: &'static str,
    pub submitting: &'static str,
    pub success_title: &'static str,
    pub success_message: &'static str,
    pub error_title: &'static str,
    pub error_message: &'static str,
    pub error_name: &'static str,
    pub error_email: &'static str,
    pub error_phone: &'static str,
    pub error_service: &'static str,
    pub error_message_length: &'static str,
    pub call_us: &'static str,
    pub hours: &'static str,
}

#[derive(Debug, Clone)]
pub struct FooterStrings {
    pub tagline: &'static str,
    pub service_area: &'static str,
    /// Placeholders: {year}
    pub rights: &'static str,
}

#[derive(Debug, Clone)]
pub struct NotFoundStrings {
    pub title: &'static str,
    pub text: &'static str,
    pub back_home: &'static str,
}

/// Complete message bundle for one locale.
#[derive(Debug, Clone)]
pub struct Messages {
    pub meta: MetaStrings,
    pub nav: NavStrings,
    pub home: HomeStrings,
    pub featured: FeaturedStrings,
    pub services: ServicesStrings,
    pub about: AboutStrings,
    pub projects: ProjectsStrings,
    pub project_detail: ProjectDetailStrings,
    pub contact: ContactStrings,
    pub footer: FooterStrings,
    pub not_found: NotFoundStrings,
    pub months: [&'static str; 12],
    /// Placeholders: {month}, {year}
    pub month_year: &'static str,
}

impl Messages {
    /// Every message keyed by its dotted path (`section.key`).
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        let m = self;
        let mut entries = vec![
            ("meta.siteName", m.meta.site_name),
            ("meta.defaultTitle", m.meta.default_title),
            ("meta.description", m.meta.description),
            ("meta.titleTemplate", m.meta.title_template),
            ("meta.projectNotFoundTitle", m.meta.project_not_found_title),
            ("meta.projectDefaultDescription", m.meta.project_default_description),
            ("nav.home", m.nav.home),
            ("nav.about", m.nav.about),
            ("nav.services", m.nav.services),
            ("nav.projects", m.nav.projects),
            ("nav.contact", m.nav.contact),
            ("nav.getQuote", m.nav.get_quote),
            ("nav.language", m.nav.language),
            ("home.heroTitle", m.home.hero_title),
            ("home.heroSubtitle", m.home.hero_subtitle),
            ("home.heroCta", m.home.hero_cta),
            ("home.heroCall", m.home.hero_call),
            ("home.trustLicensed", m.home.trust_licensed),
            ("home.trustInsured", m.home.trust_insured),
            ("home.trustYears", m.home.trust_years),
            ("home.trustEmergency", m.home.trust_emergency),
            ("home.servicesTitle", m.home.services_title),
            ("home.servicesSubtitle", m.home.services_subtitle),
            ("home.roofingTitle", m.home.roofing_title),
            ("home.roofingText", m.home.roofing_text),
            ("home.sidingTitle", m.home.siding_title),
            ("home.sidingText", m.home.siding_text),
            ("home.guttersTitle", m.home.gutters_title),
            ("home.guttersText", m.home.gutters_text),
            ("home.insuranceTitle", m.home.insurance_title),
            ("home.insuranceText", m.home.insurance_text),
            ("home.insuranceCta", m.home.insurance_cta),
            ("featured.sectionLabel", m.featured.section_label),
            ("featured.title", m.featured.title),
            ("featured.subtitle", m.featured.subtitle),
            ("featured.viewAll", m.featured.view_all),
            ("featured.projectPreview", m.featured.project_preview),
            ("featured.empty", m.featured.empty),
            ("featured.modernResidential", m.featured.modern_residential),
            ("featured.commercialRoofing", m.featured.commercial_roofing),
            ("featured.luxurySiding", m.featured.luxury_siding),
            ("services.title", m.services.title),
            ("services.subtitle", m.services.subtitle),
            ("services.roofingDetails", m.services.roofing_details),
            ("services.sidingDetails", m.services.siding_details),
            ("services.guttersDetails", m.services.gutters_details),
            ("services.insuranceDetails", m.services.insurance_details),
            ("services.ctaTitle", m.services.cta_title),
            ("services.ctaButton", m.services.cta_button),
            ("about.title", m.about.title),
            ("about.subtitle", m.about.subtitle),
            ("about.storyTitle", m.about.story_title),
            ("about.storyText", m.about.story_text),
            ("about.valuesTitle", m.about.values_title),
            ("about.valueQuality", m.about.value_quality),
            ("about.valueIntegrity", m.about.value_integrity),
            ("about.valueSafety", m.about.value_safety),
            ("about.ctaButton", m.about.cta_button),
            ("projects.title", m.projects.title),
            ("projects.subtitle", m.projects.subtitle),
            ("projects.filterAll", m.projects.filter_all),
            ("projects.emptyFiltered", m.projects.empty_filtered),
            ("projects.empty", m.projects.empty),
            ("projects.viewProject", m.projects.view_project),
            ("projects.noImage", m.projects.no_image),
            ("projectDetail.backToProjects", m.project_detail.back_to_projects),
            ("projectDetail.projectOverview", m.project_detail.project_overview),
            ("projectDetail.projectGallery", m.project_detail.project_gallery),
            ("projectDetail.projectImage", m.project_detail.project_image),
            ("projectDetail.projectDetails", m.project_detail.project_details),
            ("projectDetail.location", m.project_detail.location),
            ("projectDetail.completed", m.project_detail.completed),
            ("projectDetail.services", m.project_detail.services),
            ("projectDetail.ctaTitle", m.project_detail.cta_title),
            ("projectDetail.ctaText", m.project_detail.cta_text),
            ("projectDetail.ctaButton", m.project_detail.cta_button),
            ("projectDetail.galleryImageAlt", m.project_detail.gallery_image_alt),
            ("contact.title", m.contact.title),
            ("contact.subtitle", m.contact.subtitle),
            ("contact.required", m.contact.required),
            ("contact.formName", m.contact.form_name),
            ("contact.formNamePlaceholder", m.contact.form_name_placeholder),
            ("contact.formEmail", m.contact.form_email),
            ("contact.formEmailPlaceholder", m.contact.form_email_placeholder),
            ("contact.formPhone", m.contact.form_phone),
            ("contact.formPhonePlaceholder", m.contact.form_phone_placeholder),
            ("contact.formService", m.contact.form_service),
            ("contact.formSelectService", m.contact.form_select_service),
            ("contact.serviceRoofing", m.contact.service_roofing),
            ("contact.serviceSiding", m.contact.service_siding),
            ("contact.serviceGutters", m.contact.service_gutters),
            ("contact.serviceInsurance", m.contact.service_insurance),
            ("contact.serviceOther", m.contact.service_other),
            ("contact.formMessage", m.contact.form_message),
            ("contact.formMessagePlaceholder", m.contact.form_message_placeholder),
            ("contact.submit", m.contact.submit),
            ("contact.submitting", m.contact.submitting),
            ("contact.successTitle", m.contact.success_title),
            ("contact.successMessage", m.contact.success_message),
            ("contact.errorTitle", m.contact.error_title),
            ("contact.errorMessage", m.contact.error_message),
            ("contact.errorName", m.contact.error_name),
            ("contact.errorEmail", m.contact.error_email),
            ("contact.errorPhone", m.contact.error_phone),
            ("contact.errorService", m.contact.error_service),
            ("contact.errorMessage10", m.contact.error_message_length),
            ("contact.callUs", m.contact.call_us),
            ("contact.hours", m.contact.hours),
            ("footer.tagline", m.footer.tagline),
            ("footer.serviceArea", m.footer.service_area),
            ("footer.rights", m.footer.rights),
            ("notFound.title", m.not_found.title),
            ("notFound.text", m.not_found.text),
            ("notFound.backHome", m.not_found.back_home),
            ("date.monthYear", m.month_year),
        ];

        const MONTH_KEYS: [&str; 12] = [
            "date.month1",
            "date.month2",
            "date.month3",
            "date.month4",
            "date.month5",
            "date.month6",
            "date.month7",
            "date.month8",
            "date.month9",
            "date.month10",
            "date.month11",
            "date.month12",
        ];
        entries.extend(MONTH_KEYS.iter().copied().zip(m.months.iter().copied()));

        entries
    }

    /// Look up a message by dotted key. Unknown keys render as the key.
    pub fn lookup<'a>(&self, key: &'a str) -> &'a str {
        match self.entries().into_iter().find(|(k, _)| *k == key) {
            Some((_, value)) => value,
            None => key,
        }
    }

    /// Localized month name, 1-based. Out-of-range months yield "".
    pub fn month_name(&self, month: u32) -> &'static str {
        month
            .checked_sub(1)
            .and_then(|i| self.months.get(i as usize))
            .copied()
            .unwrap_or("")
    }

    /// "December 2024" / "diciembre de 2024".
    pub fn format_month_year(&self, date: NaiveDate) -> String {
        let year = date.year().to_string();
        fill(
            self.month_year,
            &[("month", self.month_name(date.month())), ("year", year.as_str())],
        )
    }
}

/// Replace `{name}` placeholders in `template`.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |acc, (name, value)| {
            acc.replace(&format!("{{{}}}", name), value)
        })
}

// ==================== English Messages ====================

pub static ENGLISH_MESSAGES: Messages = Messages {
    meta: MetaStrings {
        site_name: "Skyline Pro Contractors",
        default_title: "Skyline Pro Contractors | Roofing & Siding in Westchester, NY",
        description: "Expert roofing, siding, and gutter services in Westchester County. \
Licensed & Insured. Emergency storm damage repairs and insurance claims assistance.",
        title_template: "{title} | Skyline Pro Contractors",
        project_not_found_title: "Project Not Found",
        project_default_description: "Construction project by Skyline Pro",
    },
    nav: NavStrings {
        home: "Home",
        about: "About",
        services: "Services",
        projects: "Projects",
        contact: "Contact",
        get_quote: "Free Inspection",
        language: "Language",
    },
    home: HomeStrings {
        hero_title: "Protecting Homes in Westchester",
        hero_subtitle: "Roofing, siding and gutters built to last, installed by a licensed and insured local crew.",
        hero_cta: "Get a Free Inspection",
        hero_call: "Call {phone}",
        trust_licensed: "Licensed Contractor",
        trust_insured: "Fully Insured",
        trust_years: "15+ Years of Experience",
        trust_emergency: "24/7 Emergency Repairs",
        services_title: "Our Services",
        services_subtitle: "Complete exterior solutions for residential and commercial properties.",
        roofing_title: "Roofing",
        roofing_text: "Asphalt, slate and flat roof installation, replacement and repair.",
        siding_title: "Siding",
        siding_text: "Vinyl, fiber cement and wood siding that boosts curb appeal and efficiency.",
        gutters_title: "Gutters",
        gutters_text: "Seamless gutters and guards that keep water away from your foundation.",
        insurance_title: "Storm Damage & Insurance Claims",
        insurance_text: "We document the damage, meet your adjuster and handle the paperwork so you can focus on your family.",
        insurance_cta: "Start Your Claim",
    },
    featured: FeaturedStrings {
        section_label: "Our Work",
        title: "Featured Projects",
        subtitle: "A selection of recent roofing and exterior projects across Westchester County.",
        view_all: "View All Projects",
        project_preview: "Project Preview",
        empty: "New projects are coming soon.",
        modern_residential: "Modern Residential Roof",
        commercial_roofing: "Commercial Roofing",
        luxury_siding: "Luxury Siding Upgrade",
    },
    services: ServicesStrings {
        title: "Services",
        subtitle: "Everything your home's exterior needs, from one trusted contractor.",
        roofing_details: "Full roof replacements, leak repairs, ventilation upgrades and annual maintenance plans.",
        siding_details: "Siding installation and replacement with a wide range of colors and profiles.",
        gutters_details: "Seamless aluminum gutters, downspouts and leaf guards, sized for your roof.",
        insurance_details: "Free storm damage inspections and hands-on help with your insurance claim.",
        cta_title: "Ready to start your project?",
        cta_button: "Request a Free Estimate",
    },
    about: AboutStrings {
        title: "About Skyline Pro",
        subtitle: "A local, family-run contractor serving Westchester County.",
        story_title: "Our Story",
        story_text: "Skyline Pro started with one truck and a simple promise: do the job right the first time. \
Today our crews have protected hundreds of homes and businesses across the county.",
        values_title: "What We Stand For",
        value_quality: "Quality materials and workmanship on every job.",
        value_integrity: "Honest estimates with no surprises.",
        value_safety: "Safe, clean job sites from start to finish.",
        cta_button: "Talk to Our Team",
    },
    projects: ProjectsStrings {
        title: "Our Projects",
        subtitle: "Browse our recent roofing, siding and exterior work.",
        filter_all: "All",
        empty_filtered: "No projects found in this category",
        empty: "No projects to show yet.",
        view_project: "View Project",
        no_image: "No Image",
    },
    project_detail: ProjectDetailStrings {
        back_to_projects: "Back to Projects",
        project_overview: "Project Overview",
        project_gallery: "Project Gallery",
        project_image: "Project Image",
        project_details: "Project Details",
        location: "Location",
        completed: "Completed",
        services: "Services",
        cta_title: "Planning a similar project?",
        cta_text: "Get a free inspection and a detailed estimate from our team.",
        cta_button: "Contact Us",
        gallery_image_alt: "{title} - Image {index}",
    },
    contact: ContactStrings {
        title: "Contact Us",
        subtitle: "Tell us about your project and we'll get back to you within one business day.",
        required: "*",
        form_name: "Name",
        form_name_placeholder: "Your full name",
        form_email: "Email",
        form_email_placeholder: "you@example.com",
        form_phone: "Phone",
        form_phone_placeholder: "(914) 555-0123",
        form_service: "Service",
        form_select_service: "Select a service",
        service_roofing: "Roofing",
        service_siding: "Siding",
        service_gutters: "Gutters",
        service_insurance: "Insurance Claim",
        service_other: "Other",
        form_message: "Message",
        form_message_placeholder: "Tell us about your project",
        submit: "Send Message",
        submitting: "Sending...",
        success_title: "Message sent!",
        success_message: "Thank you for reaching out. We'll contact you shortly.",
        error_title: "Something went wrong",
        error_message: "We couldn't send your message. Please call us at",
        error_name: "Name must be at least 2 characters",
        error_email: "Please enter a valid email address",
        error_phone: "Phone number must be at least 10 digits",
        error_service: "Please select a service",
        error_message_length: "Message must be at least 10 characters",
        call_us: "Call Us",
        hours: "Mon-Sat, 7am-7pm",
    },
    footer: FooterStrings {
        tagline: "Expert roofing and exteriors, licensed and insured.",
        service_area: "Serving Westchester County, NY",
        rights: "© {year} Skyline Pro Contractors. All rights reserved.",
    },
    not_found: NotFoundStrings {
        title: "Page Not Found",
        text: "The page you are looking for does not exist.",
        back_home: "Back to Home",
    },
    months: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    month_year: "{month} {year}",
};

// ==================== Spanish Messages ====================

pub static SPANISH_MESSAGES: Messages = Messages {
    meta: MetaStrings {
        site_name: "Skyline Pro Contractors",
        default_title: "Skyline Pro Contractors | Techos y Revestimientos en Westchester, NY",
        description: "Servicios expertos de techos, revestimientos y canaletas en el condado de Westchester. \
Con licencia y asegurados. Reparaciones de emergencia por tormentas y asistencia con reclamos de seguros.",
        title_template: "{title} | Skyline Pro Contractors",
        project_not_found_title: "Proyecto no encontrado",
        project_default_description: "Proyecto de construcción de Skyline Pro",
    },
    nav: NavStrings {
        home: "Inicio",
        about: "Nosotros",
        services: "Servicios",
        projects: "Proyectos",
        contact: "Contacto",
        get_quote: "Inspección Gratis",
        language: "Idioma",
    },
    home: HomeStrings {
        hero_title: "Protegiendo Hogares en Westchester",
        hero_subtitle: "Techos, revestimientos y canaletas hechos para durar, instalados por un equipo local con licencia y seguro.",
        hero_cta: "Solicite una Inspección Gratis",
        hero_call: "Llame al {phone}",
        trust_licensed: "Contratista con Licencia",
        trust_insured: "Totalmente Asegurados",
        trust_years: "Más de 15 Años de Experiencia",
        trust_emergency: "Reparaciones de Emergencia 24/7",
        services_title: "Nuestros Servicios",
        services_subtitle: "Soluciones exteriores completas para propiedades residenciales y comerciales.",
        roofing_title: "Techos",
        roofing_text: "Instalación, reemplazo y reparación de techos de asfalto, pizarra y planos.",
        siding_title: "Revestimientos",
        siding_text: "Revestimientos de vinilo, fibrocemento y madera que mejoran la apariencia y la eficiencia.",
        gutters_title: "Canaletas",
        gutters_text: "Canaletas sin costuras y protectores que alejan el agua de sus cimientos.",
        insurance_title: "Daños por Tormenta y Reclamos de Seguro",
        insurance_text: "Documentamos los daños, nos reunimos con su ajustador y manejamos el papeleo para que usted se enfoque en su familia.",
        insurance_cta: "Inicie su Reclamo",
    },
    featured: FeaturedStrings {
        section_label: "Nuestro Trabajo",
        title: "Proyectos Destacados",
        subtitle: "Una selección de proyectos recientes de techos y exteriores en el condado de Westchester.",
        view_all: "Ver Todos los Proyectos",
        project_preview: "Vista Previa del Proyecto",
        empty: "Pronto publicaremos nuevos proyectos.",
        modern_residential: "Techo Residencial Moderno",
        commercial_roofing: "Techos Comerciales",
        luxury_siding: "Revestimiento de Lujo",
    },
    services: ServicesStrings {
        title: "Servicios",
        subtitle: "Todo lo que el exterior de su hogar necesita, de un contratista de confianza.",
        roofing_details: "Reemplazo completo de techos, reparación de goteras, mejoras de ventilación y planes de mantenimiento anual.",
        siding_details: "Instalación y reemplazo de revestimientos con una amplia gama de colores y perfiles.",
        gutters_details: "Canaletas de aluminio sin costuras, bajantes y protectores de hojas, a la medida de su techo.",
        insurance_details: "Inspecciones gratuitas de daños por tormenta y ayuda directa con su reclamo de seguro.",
        cta_title: "¿Listo para comenzar su proyecto?",
        cta_button: "Solicite un Presupuesto Gratis",
    },
    about: AboutStrings {
        title: "Sobre Skyline Pro",
        subtitle: "Un contratista local y familiar al servicio del condado de Westchester.",
        story_title: "Nuestra Historia",
        story_text: "Skyline Pro comenzó con un camión y una promesa sencilla: hacer bien el trabajo desde la primera vez. \
Hoy nuestros equipos han protegido cientos de hogares y negocios en todo el condado.",
        values_title: "Nuestros Valores",
        value_quality: "Materiales y mano de obra de calidad en cada trabajo.",
        value_integrity: "Presupuestos honestos y sin sorpresas.",
        value_safety: "Obras seguras y limpias de principio a fin.",
        cta_button: "Hable con Nuestro Equipo",
    },
    projects: ProjectsStrings {
        title: "Nuestros Proyectos",
        subtitle: "Explore nuestros trabajos recientes de techos, revestimientos y exteriores.",
        filter_all: "Todos",
        empty_filtered: "No se encontraron proyectos en esta categoría",
        empty: "Aún no hay proyectos para mostrar.",
        view_project: "Ver Proyecto",
        no_image: "Sin Imagen",
    },
    project_detail: ProjectDetailStrings {
        back_to_projects: "Volver a Proyectos",
        project_overview: "Resumen del Proyecto",
        project_gallery: "Galería del Proyecto",
        project_image: "Imagen del Proyecto",
        project_details: "Detalles del Proyecto",
        location: "Ubicación",
        completed: "Completado",
        services: "Servicios",
        cta_title: "¿Planea un proyecto similar?",
        cta_text: "Obtenga una inspección gratuita y un presupuesto detallado de nuestro equipo.",
        cta_button: "Contáctenos",
        gallery_image_alt: "{title} - Imagen {index}",
    },
    contact: ContactStrings {
        title: "Contáctenos",
        subtitle: "Cuéntenos sobre su proyecto y le responderemos en un día hábil.",
        required: "*",
        form_name: "Nombre",
        form_name_placeholder: "Su nombre completo",
        form_email: "Correo electrónico",
        form_email_placeholder: "usted@ejemplo.com",
        form_phone: "Teléfono",
        form_phone_placeholder: "(914) 555-0123",
        form_service: "Servicio",
        form_select_service: "Seleccione un servicio",
        service_roofing: "Techos",
        service_siding: "Revestimientos",
        service_gutters: "Canaletas",
        service_insurance: "Reclamo de Seguro",
        service_other: "Otro",
        form_message: "Mensaje",
        form_message_placeholder: "Cuéntenos sobre su proyecto",
        submit: "Enviar Mensaje",
        submitting: "Enviando...",
        success_title: "¡Mensaje enviado!",
        success_message: "Gracias por escribirnos. Nos comunicaremos con usted pronto.",
        error_title: "Algo salió mal",
        error_message: "No pudimos enviar su mensaje. Por favor llámenos al",
        error_name: "El nombre debe tener al menos 2 caracteres",
        error_email: "Ingrese un correo electrónico válido",
        error_phone: "El teléfono debe tener al menos 10 dígitos",
        error_service: "Seleccione un servicio",
        error_message_length: "El mensaje debe tener al menos 10 caracteres",
        call_us: "Llámenos",
        hours: "Lun-Sáb, 7am-7pm",
    },
    footer: FooterStrings {
        tagline: "Techos y exteriores expertos, con licencia y asegurados.",
        service_area: "Al servicio del condado de Westchester, NY",
        rights: "© {year} Skyline Pro Contractors. Todos los derechos reservados.",
    },
    not_found: NotFoundStrings {
        title: "Página no encontrada",
        text: "La página que busca no existe.",
        back_home: "Volver al Inicio",
    },
    months: [
        "enero",
        "febrero",
        "marzo",
        "abril",
        "mayo",
        "junio",
        "julio",
        "agosto",
        "septiembre",
        "octubre",
        "noviembre",
        "diciembre",
    ],
    month_year: "{month} de {year}",
};
