//! Static page content: the featured video and the outbound resource links.

/// A video hosted on YouTube and shown through its embed player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoEmbed {
    pub video_id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

impl VideoEmbed {
    /// Embed player URL with related-video suggestions disabled.
    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}?rel=0", self.video_id)
    }

    /// Still image shown until the player reports that it loaded.
    pub fn thumbnail_url(&self) -> String {
        format!("https://img.youtube.com/vi/{}/maxresdefault.jpg", self.video_id)
    }
}

pub const FEATURED_VIDEO: VideoEmbed = VideoEmbed {
    video_id: "ZQ6fSHr5TJg",
    title: "How Climate Change is Affecting Phoenix's Neighborhoods",
    description: "This video provides a scholarly overview of how climate change affects different types of neighborhoods across Arizona and what we can do to implement change.",
};

/// An external site listed in the resources section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceLink {
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    /// Tailwind color family used for the card background and hover.
    pub accent: &'static str,
}

impl ResourceLink {
    pub fn card_class(&self) -> String {
        format!(
            "h-full flex flex-col bg-{0}-50 border-{0}-200 transition-colors",
            self.accent
        )
    }

    pub fn hover_class(&self) -> String {
        format!("hover:bg-{}-100", self.accent)
    }
}

pub const RESOURCE_LINKS: [ResourceLink; 3] = [
    ResourceLink {
        title: "NOAA Climate Data Online",
        description: "Access historical climate data, tools, and resources from the National Oceanic and Atmospheric Administration.",
        url: "https://www.ncdc.noaa.gov/cdo-web/",
        accent: "blue",
    },
    ResourceLink {
        title: "National Weather Service Phoenix",
        description: "Weather forecasts, warnings, and climate information specific to the Phoenix metropolitan area.",
        url: "https://www.weather.gov/psr/",
        accent: "green",
    },
    ResourceLink {
        title: "City of Phoenix Sustainability",
        description: "Learn about Phoenix's sustainability initiatives, climate action plans, and environmental efforts.",
        url: "https://www.phoenix.gov/administration/departments/sustainability.html",
        accent: "purple",
    },
];

/// Small explanatory card shown under the visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoCard {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub const INFO_CARDS: [InfoCard; 3] = [
    InfoCard {
        title: "How to Use",
        items: &[
            "Use the buttons at the top to switch between visualization types",
            "Hover over data points to see exact temperature values",
            "Compare solid lines (2024) with dotted lines (1990) to observe changes",
            "Toggle the different maximum, minimum, or average values on the legend to isolate them",
        ],
    },
    InfoCard {
        title: "Key Findings",
        items: &[
            "Maximum temperatures show significant increases during summer months",
            "Minimum temperatures have risen more consistently throughout the year",
            "The gap between 1990 and 2024 data illustrates the warming trend in Phoenix",
        ],
    },
    InfoCard {
        title: "Data Sources",
        items: &[
            "Temperature data was collected from NOAA Climate Data Online and the National Weather Service Phoenix. All measurements are in Fahrenheit.",
        ],
    },
];
