//! Built-in document catalog: the pages to fetch and the static link list.

/// Root directory under which documents and the links file are written.
pub const DEFAULT_BASE_DIR: &str = "docs/Revenova Docs";

/// Name of the external links file inside the base directory.
pub const EXTERNAL_LINKS_FILE: &str = "EXTERNAL_LINKS.md";

/// Revenova documentation pages, fetched in this order.
pub const DOC_URLS: &[&str] = &[
    "https://documents.revenova.com/docs/revenova-tms-release-notes",
    "https://documents.revenova.com/docs/revenova-tms-installation-guide",
    "https://documents.revenova.com/docs/data-dictionary",
    "https://documents.revenova.com/docs/revenova-tms-web-services-guide",
    "https://documents.revenova.com/docs/integrations",
    "http://documents.revenova.com/docs/field-set-summary",
    "https://documents.revenova.com/docs/lightning-web-components-lwcs",
    "https://documents.revenova.com/docs/fleet-management-2",
    "https://documents.revenova.com/docs/accounting-seed-1",
    "https://documents.revenova.com/docs/payiq",
    "https://documents.revenova.com/docs/revenova-tms-analytics-user-guide",
];

/// A third-party developer portal listed in the links file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const EXTERNAL_LINKS: &[ExternalLink] = &[
    ExternalLink {
        label: "Salesforce Developer Documentation",
        url: "https://help.salesforce.com/s/products/platform?language=en_US",
    },
    ExternalLink {
        label: "Estes Express API Developer Portal",
        url: "https://developer.estes-express.com/",
    },
    ExternalLink {
        label: "ABF Freight (ArcBest) Shipping APIs",
        url: "https://arcb.com/technology/shippers/API",
    },
    ExternalLink {
        label: "Ward Transport & Logistics API",
        url: "https://wardtlctools.com/wardtrucking/apirequest/create",
    },
    ExternalLink {
        label: "A Duie Pyle Web Services",
        url: "https://aduiepyle.com/resources/it-support/",
    },
    ExternalLink {
        label: "Saia Motor Freight Line Developer Portal",
        url: "https://saiaprodapi.developer.azure-api.net/",
    },
    ExternalLink {
        label: "Southeastern Freight Lines Web Connect API",
        url: "https://www.sefl.com/seflWebsite/technology/webConnect.jsp",
    },
];

/// Returns the built-in URL list as owned strings (input shape for the batch runner).
pub fn doc_urls() -> Vec<String> {
    DOC_URLS.iter().map(|u| u.to_string()).collect()
}
