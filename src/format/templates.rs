//! Fixed markdown for the informational tools. Only the site, portal and
//! repository locations come from configuration.

use crate::config::RelayConfig;

pub fn support_info(config: &RelayConfig) -> String {
    let docs = &config.docs_base_url;
    let portal = &config.portal_url;
    format!(
        r#"
# UAB Research Computing Support Information

## Primary Documentation Site
{docs}

## Cheaha Access Portal
{portal}

## Getting Support

The UAB Research Computing team provides support through multiple channels:

### Office Hours
Visit the documentation site for current office hours information:
{docs}/help/office_hours

### Support Portal
For technical support, questions, and issues:
{docs}/help/support

### Contributing to Documentation
If you'd like to contribute to improving the documentation:
{docs}/contributing/contributor_guide/

## Quick Links

- **Main Documentation:** {docs}
- **Cheaha Login:** {portal}
- **Getting Started Guides:** {docs}/getting-started/
- **Software Documentation:** {docs}/software/
- **Storage & Data:** {docs}/storage/

## About UAB Research Computing

UAB Research Computing is part of UAB IT, with a mission to serve and support
the UAB Research Community with all of their research computing and data needs.

Services include:
- High-Performance Computing (Cheaha cluster)
- Data storage and management
- Research software support
- Consultation and training
- Cloud computing integration

For the most up-to-date information, always refer to the official documentation
at {docs}
"#
    )
}

pub fn documentation_sections(config: &RelayConfig) -> String {
    let docs = &config.docs_base_url;
    let portal = &config.portal_url;
    let repo = config.repo_url();
    format!(
        r#"
# UAB Research Computing Documentation Structure

The documentation is organized into the following main sections:

## 1. Getting Started
Learn the basics of using UAB Research Computing resources
- Introduction to Cheaha
- Account setup and access
- First steps tutorials
- Basic HPC concepts

## 2. Help & Support
Get assistance with your research computing needs
- Office hours schedule
- Support portal and ticketing
- Contact information
- FAQ and troubleshooting

## 3. Software & Applications
Information about available software and tools
- Installed software catalog
- Module system (Lmod)
- Custom software installation
- Containers (Singularity/Apptainer)
- Licensed software access

## 4. Storage & Data Management
Managing your research data
- Storage systems overview
- Quota and allocations
- Data transfer methods
- Backup and archival
- Data security and compliance

## 5. Job Scheduling (SLURM)
Running computational jobs on Cheaha
- SLURM basics and commands
- Job submission scripts
- Resource requests
- Queue policies
- Job arrays and dependencies

## 6. Best Practices
Guidelines for effective use of research computing resources
- Workflow optimization
- Resource efficiency
- Reproducible research
- Collaboration and sharing

## 7. Contributing
How to contribute to the documentation
- Contributor guide
- Documentation standards
- Submitting changes

## Quick Access

- **Main Site:** {docs}
- **Cheaha Portal:** {portal}
- **GitHub Repository:** {repo}

Use the 'search_documentation' tool to find specific topics within these sections,
or 'get_documentation_page' to retrieve full content from a specific page.
"#
    )
}

pub fn cheaha_quick_start(config: &RelayConfig) -> String {
    let docs = &config.docs_base_url;
    let portal = &config.portal_url;
    format!(
        r#"
# Cheaha HPC Quick Start Guide

## What is Cheaha?

Cheaha is the University of Alabama at Birmingham's high-performance computing (HPC)
cluster, providing powerful computational resources for research.

## Getting Started

### 1. Account Creation
- Visit the account creation page to set up your Cheaha account
- All researchers receive 5 TB of individual storage

### 2. Access Methods

**Primary Access - Web Portal (Recommended)**
The easiest way to access Cheaha is through the Open OnDemand web portal:
**{portal}**

Requirements:
- UAB credentials
- Duo 2-Factor Authentication

**Alternative - SSH Access**
For command-line access:
```bash
ssh YOUR_BLAZERID@cheaha.rc.uab.edu
```
(Connect to port 22)

### 3. Interactive Applications Available
Once logged in through the web portal, you can access:
- **File Browser** - Manage your files
- **Remote Desktop** - Full desktop environment
- **Jupyter Notebook/Lab** - Interactive computing
- **RStudio** - R development environment
- **MATLAB** - Mathematical computing

## Important Usage Guidelines

⚠️ **Critical Rule**: Do not run compute-intensive tasks on login nodes
- Always use SLURM job scheduler for computational work
- Choose appropriate partition based on your needs

## Compute Partitions

### GPU Processing
- **pascalnodes** - Pascal GPU nodes
- **amperenodes** - Ampere GPU nodes

### General Purpose
- **amd-hdr100** - General computing

### Time-based Partitions
- **express** - Short jobs
- **short** - Short-term computing
- **medium** - Medium-term jobs
- **long** - Long-running jobs

### Specialized
- **largemem** - High memory requirements

## Software Access

- Software available through the **module system**
- **Anaconda recommended** for package management
- Need help with software? Submit a support ticket

## Getting Support

### Documentation Home
{docs}

### Support Channels
- Office Hours: {docs}/help/office_hours
- Support Portal: {docs}/help/support

## Next Steps

Use the MCP tools to explore specific topics:
- `search_documentation("slurm tutorial")` - Learn job submission
- `search_documentation("modules")` - Software module system
- `search_documentation("partitions")` - Compute node details
- `search_documentation("storage")` - Data management

**Quick Tip**: Always submit computational jobs through SLURM to utilize compute nodes effectively.

For the most current information, always refer to {docs}
"#
    )
}
