use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Bio {
    pub name: &'static str,
    pub title: &'static str,
    pub affiliation: &'static str,
    pub ex_affiliation: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub short_bio: &'static str,
    pub long_bio: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SocialIcon {
    Linkedin,
    Mail,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub platform: &'static str,
    pub url: &'static str,
    pub icon: SocialIcon,
}

#[derive(Debug, Clone, Serialize)]
pub struct Referral {
    pub quote: &'static str,
    pub author: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PublicationItem {
    pub id: &'static str,
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<&'static str>,
    pub status: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<&'static str>,
}
