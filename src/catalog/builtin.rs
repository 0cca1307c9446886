//! Built-in service definitions.
//!
//! Bodies are written with `${...}` placeholders so the generated file works
//! against the emitted `.env`, or can be interpolated inline with
//! `--interpolate`. Each body is one service entry; the generator nests it
//! under the shared `services:` root.

use super::ServiceDefinition;

fn service(
    id: &str,
    name: &str,
    description: &str,
    compose_body: &str,
    is_unsupported: bool,
) -> ServiceDefinition {
    ServiceDefinition {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        compose_body: compose_body.to_string(),
        is_unsupported,
    }
}

pub(super) fn definitions() -> Vec<ServiceDefinition> {
    vec![
        service(
            "sonarr",
            "Sonarr",
            "Smart PVR for newsgroup and bittorrent users to manage TV series",
            r#"sonarr:
  image: lscr.io/linuxserver/sonarr:latest
  container_name: ${CONTAINER_PREFIX}sonarr
  environment:
    - PUID=${PUID}
    - PGID=${PGID}
    - TZ=${TZ}
    - UMASK=${UMASK}
  volumes:
    - ${CONFIG_PATH}/sonarr:/config
    - ${DATA_PATH}:/data
  ports:
    - "8989:8989"
  restart: ${RESTART_POLICY}"#,
            false,
        ),
        service(
            "radarr",
            "Radarr",
            "Movie collection manager for Usenet and BitTorrent users",
            r#"radarr:
  image: lscr.io/linuxserver/radarr:latest
  container_name: ${CONTAINER_PREFIX}radarr
  environment:
    - PUID=${PUID}
    - PGID=${PGID}
    - TZ=${TZ}
    - UMASK=${UMASK}
  volumes:
    - ${CONFIG_PATH}/radarr:/config
    - ${DATA_PATH}:/data
  ports:
    - "7878:7878"
  restart: ${RESTART_POLICY}"#,
            false,
        ),
        service(
            "prowlarr",
            "Prowlarr",
            "Indexer manager/proxy built on the popular *arr stack",
            r#"prowlarr:
  image: lscr.io/linuxserver/prowlarr:latest
  container_name: ${CONTAINER_PREFIX}prowlarr
  environment:
    - PUID=${PUID}
    - PGID=${PGID}
    - TZ=${TZ}
  volumes:
    - ${CONFIG_PATH}/prowlarr:/config
  ports:
    - "9696:9696"
  restart: ${RESTART_POLICY}"#,
            false,
        ),
        service(
            "jellyfin",
            "Jellyfin",
            "Free software media system that puts you in control of your media",
            r#"jellyfin:
  image: lscr.io/linuxserver/jellyfin:latest
  container_name: ${CONTAINER_PREFIX}jellyfin
  network_mode: ${NETWORK_MODE}
  environment:
    - PUID=${PUID}
    - PGID=${PGID}
    - TZ=${TZ}
  volumes:
    - ${CONFIG_PATH}/jellyfin:/config
    - ${DATA_PATH}/media:/media
  ports:
    - "8096:8096"
  restart: ${RESTART_POLICY}"#,
            false,
        ),
        service(
            "qbittorrent",
            "qBittorrent",
            "Free and reliable P2P BitTorrent client with a web UI",
            r#"qbittorrent:
  image: lscr.io/linuxserver/qbittorrent:latest
  container_name: ${CONTAINER_PREFIX}qbittorrent
  environment:
    - PUID=${PUID}
    - PGID=${PGID}
    - TZ=${TZ}
    - UMASK=${UMASK}
    - WEBUI_PORT=8080
  volumes:
    - ${CONFIG_PATH}/qbittorrent:/config
    - ${DATA_PATH}/downloads:/downloads
  ports:
    - "8080:8080"
    - "6881:6881"
    - "6881:6881/udp"
  restart: ${RESTART_POLICY}"#,
            false,
        ),
        service(
            "portainer",
            "Portainer",
            "Container management UI for Docker environments",
            r#"portainer:
  image: portainer/portainer-ce:latest
  container_name: ${CONTAINER_PREFIX}portainer
  volumes:
    - /var/run/docker.sock:/var/run/docker.sock
    - ${CONFIG_PATH}/portainer:/data
  ports:
    - "9000:9000"
    - "9443:9443"
  restart: ${RESTART_POLICY}"#,
            false,
        ),
        service(
            "overseerr",
            "Overseerr",
            "Request management and media discovery for your media server",
            r#"overseerr:
  image: lscr.io/linuxserver/overseerr:latest
  container_name: ${CONTAINER_PREFIX}overseerr
  environment:
    - PUID=${PUID}
    - PGID=${PGID}
    - TZ=${TZ}
  volumes:
    - ${CONFIG_PATH}/overseerr:/config
  ports:
    - "5055:5055"
  restart: ${RESTART_POLICY}"#,
            false,
        ),
        service(
            "homepage",
            "Homepage",
            "Highly customizable application dashboard",
            r#"homepage:
  image: ghcr.io/gethomepage/homepage:latest
  container_name: ${CONTAINER_PREFIX}homepage
  environment:
    - PUID=${PUID}
    - PGID=${PGID}
    - TZ=${TZ}
  volumes:
    - ${CONFIG_PATH}/homepage:/app/config
  ports:
    - "3000:3000"
  restart: ${RESTART_POLICY}"#,
            false,
        ),
        service(
            "nginx-proxy-manager",
            "Nginx Proxy Manager",
            "Expose your services with free SSL, through a simple web UI",
            r#"nginx-proxy-manager:
  image: jc21/nginx-proxy-manager:latest
  container_name: ${CONTAINER_PREFIX}nginx-proxy-manager
  environment:
    - TZ=${TZ}
  volumes:
    - ${CONFIG_PATH}/npm/data:/data
    - ${CONFIG_PATH}/npm/letsencrypt:/etc/letsencrypt
  ports:
    - "80:80"
    - "81:81"
    - "443:443"
  restart: ${RESTART_POLICY}"#,
            false,
        ),
        service(
            "watchtower",
            "Watchtower",
            "Automates updating Docker container base images",
            r#"watchtower:
  image: containrrr/watchtower:latest
  container_name: ${CONTAINER_PREFIX}watchtower
  environment:
    - TZ=${TZ}
    - WATCHTOWER_CLEANUP=true
  volumes:
    - /var/run/docker.sock:/var/run/docker.sock
  restart: ${RESTART_POLICY}"#,
            false,
        ),
        // Needs host networking and hardware devices that compose validation
        // cannot check portably.
        service(
            "home-assistant",
            "Home Assistant",
            "Open source home automation that puts local control first",
            r#"home-assistant:
  image: ghcr.io/home-assistant/home-assistant:stable
  container_name: ${CONTAINER_PREFIX}home-assistant
  network_mode: host
  privileged: true
  environment:
    - TZ=${TZ}
  volumes:
    - ${CONFIG_PATH}/home-assistant:/config
  restart: ${RESTART_POLICY}"#,
            true,
        ),
    ]
}
