/// The fixed set of resource domains a [crate::GalaxyInstance] has a client for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ResourceDomain {
    Libraries,
    Histories,
    Workflows,
    Datasets,
    Users,
    Genomes,
    Tools,
    ToolShed,
    Config,
    Visual,
    Quotas,
    Groups,
    Roles,
    Datatypes,
    Jobs,
    Forms,
    FtpFiles,
    ToolData,
    Folders,
}

impl ResourceDomain {
    pub const ALL: [ResourceDomain; 19] = [
        ResourceDomain::Libraries,
        ResourceDomain::Histories,
        ResourceDomain::Workflows,
        ResourceDomain::Datasets,
        ResourceDomain::Users,
        ResourceDomain::Genomes,
        ResourceDomain::Tools,
        ResourceDomain::ToolShed,
        ResourceDomain::Config,
        ResourceDomain::Visual,
        ResourceDomain::Quotas,
        ResourceDomain::Groups,
        ResourceDomain::Roles,
        ResourceDomain::Datatypes,
        ResourceDomain::Jobs,
        ResourceDomain::Forms,
        ResourceDomain::FtpFiles,
        ResourceDomain::ToolData,
        ResourceDomain::Folders,
    ];

    /// Name of the field on [crate::GalaxyInstance] holding this domain's client.
    pub fn name(&self) -> &'static str {
        match self {
            ResourceDomain::Libraries => "libraries",
            ResourceDomain::Histories => "histories",
            ResourceDomain::Workflows => "workflows",
            ResourceDomain::Datasets => "datasets",
            ResourceDomain::Users => "users",
            ResourceDomain::Genomes => "genomes",
            ResourceDomain::Tools => "tools",
            ResourceDomain::ToolShed => "tool_shed",
            ResourceDomain::Config => "config",
            ResourceDomain::Visual => "visual",
            ResourceDomain::Quotas => "quotas",
            ResourceDomain::Groups => "groups",
            ResourceDomain::Roles => "roles",
            ResourceDomain::Datatypes => "datatypes",
            ResourceDomain::Jobs => "jobs",
            ResourceDomain::Forms => "forms",
            ResourceDomain::FtpFiles => "ftp_files",
            ResourceDomain::ToolData => "tool_data",
            ResourceDomain::Folders => "folders",
        }
    }

    /// Path segment of this domain under the API root.
    pub fn module(&self) -> &'static str {
        match self {
            ResourceDomain::ToolShed => "tool_shed_repositories",
            ResourceDomain::Config => "configuration",
            ResourceDomain::Visual => "visualizations",
            other => other.name(),
        }
    }
}
