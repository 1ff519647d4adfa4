//! Client assets compiled into the binary and served under `/static`.

/// (file name, content type, body)
pub const STATIC_FILES: &[(&str, &str, &str)] = &[
  ("site.css", "text/css; charset=utf-8", SITE_CSS),
  ("carousel.js", "text/javascript; charset=utf-8", CAROUSEL_JS),
  ("model-viewer.js", "text/javascript; charset=utf-8", MODEL_VIEWER_JS),
  ("placeholder.svg", "image/svg+xml", PLACEHOLDER_SVG),
];

pub fn lookup(name: &str) -> Option<(&'static str, &'static str)> {
  STATIC_FILES
    .iter()
    .find(|(file, _, _)| *file == name)
    .map(|(_, content_type, body)| (*content_type, *body))
}

pub const MODEL_VIEWER_JS: &str = r##"import * as THREE from 'three';
import { OrbitControls } from 'three/addons/controls/OrbitControls.js';
import { GLTFLoader } from 'three/addons/loaders/GLTFLoader.js';
import { FBXLoader } from 'three/addons/loaders/FBXLoader.js';
import { OBJLoader } from 'three/addons/loaders/OBJLoader.js';
import { PLYLoader } from 'three/addons/loaders/PLYLoader.js';
import { STLLoader } from 'three/addons/loaders/STLLoader.js';
import { RoomEnvironment } from 'three/addons/environments/RoomEnvironment.js';

// Geometry-only formats get a neutral metal material
function meshFromGeometry(geometry) {
  geometry.computeVertexNormals();
  const material = new THREE.MeshStandardMaterial({
    color: 0xaaaaaa,
    roughness: 0.5,
    metalness: 0.7,
    side: THREE.DoubleSide
  });
  return new THREE.Mesh(geometry, material);
}

// One handler per loader tag sent by the server
const LOADERS = {
  gltf: (url, onProgress) => new GLTFLoader().loadAsync(url, onProgress).then((gltf) => gltf.scene),
  fbx: (url, onProgress) => new FBXLoader().loadAsync(url, onProgress),
  obj: (url, onProgress) => new OBJLoader().loadAsync(url, onProgress),
  ply: (url, onProgress) => new PLYLoader().loadAsync(url, onProgress).then(meshFromGeometry),
  stl: (url, onProgress) => new STLLoader().loadAsync(url, onProgress).then(meshFromGeometry)
};

const mounted = new Map(); // stage element -> viewer

export function mountViewers(root = document) {
  root.querySelectorAll('.model-stage[data-viewer]').forEach((el) => {
    if (mounted.has(el)) return;
    let config;
    try {
      config = JSON.parse(el.dataset.viewer);
    } catch (error) {
      console.error('Invalid viewer config:', error);
      return;
    }
    mounted.set(el, createViewer(el, config));
  });
}

export function unmountViewers(root = document) {
  for (const [el, viewer] of mounted) {
    if (root === document || root.contains(el)) {
      viewer.dispose();
      mounted.delete(el);
    }
  }
}

function createViewer(el, config) {
  const options = config.options;
  const cam = config.camera;
  const source = config.source || {};
  const placeholder = el.querySelector('.model-placeholder');
  const progress = el.querySelector('.progress');
  const captureButton = el.querySelector('.capture');

  const width = () => Math.max(el.clientWidth, 1);
  const height = () => Math.max(el.clientHeight, 1);

  // Scene setup
  const scene = new THREE.Scene();
  const camera = new THREE.PerspectiveCamera(cam.fov, width() / height(), 0.1, 1000);
  camera.position.set(0, 0, cam.distance);

  const renderer = new THREE.WebGLRenderer({ antialias: true, alpha: true, preserveDrawingBuffer: true });
  renderer.setPixelRatio(window.devicePixelRatio);
  renderer.setSize(width(), height());
  renderer.toneMapping = THREE.ACESFilmicToneMapping;
  el.appendChild(renderer.domElement);

  // Lighting
  const lighting = config.lighting;
  let environment = null;
  if (lighting.environment) {
    const pmrem = new THREE.PMREMGenerator(renderer);
    environment = pmrem.fromScene(new RoomEnvironment(renderer), 0.04).texture;
    scene.environment = environment;
    pmrem.dispose();
  }
  scene.add(new THREE.AmbientLight(0xffffff, lighting.ambient));
  const keyLight = new THREE.DirectionalLight(0xffffff, lighting.key);
  keyLight.position.set(5, 10, 5);
  scene.add(keyLight);
  const fillLight = new THREE.DirectionalLight(0xffffff, lighting.fill);
  fillLight.position.set(-5, 5, 5);
  scene.add(fillLight);

  // Contact shadow: a floor that only shows the shadow falling on it
  const shadow = lighting.contact_shadow;
  if (shadow) {
    renderer.shadowMap.enabled = true;
    renderer.shadowMap.type = THREE.PCFShadowMap;
    keyLight.castShadow = true;
    keyLight.shadow.radius = shadow.blur;
    keyLight.shadow.mapSize.set(1024, 1024);
    const half = shadow.size / 2;
    Object.assign(keyLight.shadow.camera, { left: -half, right: half, top: half, bottom: -half });
    const floor = new THREE.Mesh(
      new THREE.PlaneGeometry(shadow.size, shadow.size),
      new THREE.ShadowMaterial({ opacity: shadow.opacity })
    );
    floor.rotation.x = -Math.PI / 2;
    floor.position.y = shadow.y;
    floor.receiveShadow = true;
    scene.add(floor);
  }

  // Camera controls
  const controls = new OrbitControls(camera, renderer.domElement);
  controls.minDistance = cam.min_distance;
  controls.maxDistance = cam.max_distance;

  // turntable: orientation and idle yaw; pivot: centering and scale
  const turntable = new THREE.Group();
  const pivot = new THREE.Group();
  turntable.add(pivot);
  scene.add(turntable);

  let alive = true;
  let phase = 'loading';
  let fadeElapsed = 0;
  let frameQueued = false;
  let last = null;
  const materials = [];

  // On-demand rendering: nothing is drawn unless something asked for a frame
  function requestFrame() {
    if (!alive || frameQueued) return;
    frameQueued = true;
    requestAnimationFrame(frame);
  }

  function frame(now) {
    frameQueued = false;
    if (!alive) return;

    const dt = last === null ? 0 : (now - last) / 1000;
    last = now;

    const hasGeometry = phase === 'fading' || phase === 'loaded';
    if (hasGeometry && options.auto_rotate && options.auto_rotate_speed !== 0) {
      turntable.rotation.y += options.auto_rotate_speed * dt;
      requestFrame();
    }

    if (phase === 'fading') {
      fadeElapsed = Math.min(fadeElapsed + dt * 1000, config.fade_in_ms);
      setOpacity(fadeElapsed / config.fade_in_ms);
      if (fadeElapsed >= config.fade_in_ms) {
        phase = 'loaded';
        materials.forEach((m) => { m.transparent = false; });
        onLoaded();
      } else {
        requestFrame();
      }
    }

    renderer.render(scene, camera);

    // Next frame after an idle stretch starts with a zero step
    if (!frameQueued) last = null;
  }

  function setOpacity(value) {
    materials.forEach((m) => { m.opacity = value; });
  }

  function onLoaded() {
    if (placeholder) placeholder.hidden = true;
    if (captureButton) captureButton.hidden = false;
    el.dispatchEvent(new CustomEvent('model-loaded', { bubbles: true, detail: { url: source.url } }));
    console.log(`Loaded: ${source.url}`);
  }

  // Framing is computed server side from the measured bounds
  async function fetchFraming(box) {
    const response = await fetch(config.framing_url, {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ min: box.min.toArray(), max: box.max.toArray() })
    });
    if (!response.ok) throw new Error(`framing request failed: ${response.status}`);
    return response.json();
  }

  async function onGeometry(object) {
    if (!alive) return;

    // Bounds in the object's own frame, before it joins the rotated turntable
    object.updateWorldMatrix(true, true);
    const box = new THREE.Box3().setFromObject(object);

    let framing = null;
    if (!box.isEmpty()) {
      try {
        framing = await fetchFraming(box);
      } catch (error) {
        console.warn(`Showing ${source.url} unframed:`, error);
      }
    }
    if (!alive) return;

    pivot.add(object);
    if (framing) {
      pivot.scale.setScalar(framing.scale);
      pivot.position.fromArray(framing.position);
      turntable.rotation.set(framing.rotation[0], framing.rotation[1], framing.rotation[2]);
    }

    object.traverse((child) => {
      if (child.isMesh) {
        child.castShadow = true;
        const list = Array.isArray(child.material) ? child.material : [child.material];
        list.forEach((m) => materials.push(m));
      }
    });

    if (options.fade_in) {
      materials.forEach((m) => {
        m.transparent = true;
        m.opacity = 0;
      });
      phase = 'fading';
    } else {
      phase = 'loaded';
      onLoaded();
    }
    requestFrame();
  }

  const load = LOADERS[source.loader];
  if (source.state !== 'supported' || !load) {
    // Stays on the placeholder
    console.warn(`Unsupported model: ${source.url}`);
  } else {
    console.log(`Starting load: ${source.url}`);
    load(source.url, (xhr) => {
      if (alive && progress && xhr.total) {
        progress.textContent = `${Math.round((xhr.loaded / xhr.total) * 100)} %`;
      }
    })
      .then(onGeometry)
      .catch((error) => {
        console.error(`Error loading ${source.url}:`, error);
      });
  }

  controls.addEventListener('change', requestFrame);

  const resizeObserver = new ResizeObserver(() => {
    camera.aspect = width() / height();
    camera.updateProjectionMatrix();
    renderer.setSize(width(), height());
    requestFrame();
  });
  resizeObserver.observe(el);

  const capture = () => {
    const a = document.createElement('a');
    a.download = 'model-capture.png';
    a.href = renderer.domElement.toDataURL('image/png');
    a.click();
  };
  if (captureButton) captureButton.addEventListener('click', capture);

  requestFrame();

  return {
    dispose() {
      alive = false;
      resizeObserver.disconnect();
      controls.removeEventListener('change', requestFrame);
      controls.dispose();
      if (captureButton) captureButton.removeEventListener('click', capture);
      pivot.traverse((child) => {
        if (child.isMesh) {
          if (child.geometry) child.geometry.dispose();
          const list = Array.isArray(child.material) ? child.material : [child.material];
          list.forEach((m) => m && m.dispose());
        }
      });
      if (environment) environment.dispose();
      renderer.dispose();
      renderer.domElement.remove();
    }
  };
}
"##;

pub const CAROUSEL_JS: &str = r##"import { mountViewers, unmountViewers } from './model-viewer.js';

// Scoped listener registration; the return value releases it
function subscribe(target, type, handler, options) {
  target.addEventListener(type, handler, options);
  return () => target.removeEventListener(type, handler, options);
}

let releaseCarousel = () => {};

function bindCarousel(el) {
  const releases = [
    subscribe(el, 'click', (event) => {
      const link = event.target.closest('a[data-fragment]');
      if (!link || !el.contains(link)) return;
      event.preventDefault();
      follow(link, false);
    }),
    subscribe(el, 'keydown', (event) => {
      if (event.target !== el) return;
      const selector = event.key === 'ArrowLeft' ? '.carousel-nav.prev'
        : event.key === 'ArrowRight' ? '.carousel-nav.next'
        : null;
      if (!selector) return;
      const link = el.querySelector(selector);
      if (!link) return;
      event.preventDefault();
      follow(link, true);
    })
  ];
  releaseCarousel = () => releases.forEach((release) => release());
}

async function follow(link, keepFocus) {
  const swapped = await swapCarousel(link.dataset.fragment, keepFocus);
  if (swapped) {
    history.replaceState(null, '', link.href);
  } else {
    window.location.href = link.href;
  }
}

async function swapCarousel(url, keepFocus) {
  const current = document.getElementById('carousel');
  if (!current) return false;

  let html;
  try {
    const response = await fetch(url);
    if (!response.ok) return false;
    html = await response.text();
  } catch (error) {
    console.error('Carousel fetch failed:', error);
    return false;
  }

  const template = document.createElement('template');
  template.innerHTML = html.trim();
  const next = template.content.firstElementChild;
  if (!next) return false;

  unmountViewers(current);
  releaseCarousel();
  current.replaceWith(next);
  bindCarousel(next);
  mountViewers(next);
  if (keepFocus) next.focus();
  return true;
}

function bindHeader() {
  const header = document.getElementById('site-header');
  if (!header) return () => {};
  const update = () => header.classList.toggle('scrolled', window.scrollY > 20);
  update();
  return subscribe(window, 'scroll', update, { passive: true });
}

function revealOnScroll() {
  const observer = new IntersectionObserver((entries) => {
    entries.forEach((entry) => {
      if (entry.isIntersecting) {
        entry.target.classList.add('visible');
        observer.unobserve(entry.target);
      }
    });
  }, { threshold: 0.1 });
  document.querySelectorAll('.reveal').forEach((el) => observer.observe(el));
  return () => observer.disconnect();
}

// WebSocket connection for content reloads
function connectLiveReload() {
  const protocol = window.location.protocol === 'https:' ? 'wss:' : 'ws:';
  const ws = new WebSocket(`${protocol}//${window.location.host}/ws`);

  ws.onopen = () => {
    console.log('Live reload connected');
  };

  ws.onmessage = (event) => {
    const msg = JSON.parse(event.data);
    switch (msg.type) {
      case 'content_reloaded':
        window.location.reload();
        break;
      case 'content_rejected':
        console.warn(`Content change rejected: ${msg.message}`);
        break;
    }
  };

  ws.onclose = () => {
    console.log('Live reload disconnected - reconnecting in 2s...');
    setTimeout(connectLiveReload, 2000);
  };
}

const releaseHeader = bindHeader();
const releaseReveal = revealOnScroll();

const carousel = document.getElementById('carousel');
if (carousel) bindCarousel(carousel);
mountViewers(document);

if (document.body.dataset.liveReload === 'true') connectLiveReload();

window.addEventListener('pagehide', () => {
  releaseHeader();
  releaseReveal();
  releaseCarousel();
  unmountViewers(document);
}, { once: true });
"##;

pub const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="800" height="600" viewBox="0 0 800 600">
  <rect width="800" height="600" fill="#eaf2f6"/>
  <circle cx="400" cy="300" r="64" fill="#00416b" opacity="0.85"/>
  <path d="M382 268 L382 332 L432 300 Z" fill="#ffffff"/>
</svg>
"##;

pub const SITE_CSS: &str = r##":root {
  --navy: #00416b;
  --cream: #f1ead6;
  --muted: rgba(0, 65, 107, 0.65);
  --line: rgba(0, 65, 107, 0.08);
  --radius: 24px;
}

* { box-sizing: border-box; }

body {
  margin: 0;
  background: var(--cream);
  color: var(--navy);
  font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
  line-height: 1.5;
}

a { color: inherit; }
img { display: block; max-width: 100%; }
h1, h2, h3, h4 { margin: 0 0 0.5rem; line-height: 1.15; }
h1 { font-size: clamp(2.25rem, 5vw, 4rem); }
h2 { font-size: clamp(1.75rem, 4vw, 3rem); }

.muted { color: var(--muted); }
.small { font-size: 0.8rem; }
.lead { font-size: 1.1rem; max-width: 40rem; }
.strong, .strong-link { font-weight: 600; text-decoration: none; }
.strong-link:hover { text-decoration: underline; }

.pill {
  display: inline-block;
  padding: 0.4rem 1rem;
  border-radius: 999px;
  background: rgba(0, 65, 107, 0.1);
  font-size: 0.85rem;
  font-weight: 600;
  margin-bottom: 1rem;
}
.pill.small { font-size: 0.7rem; text-transform: uppercase; letter-spacing: 0.08em; }

.eyebrow {
  font-size: 0.75rem;
  font-weight: 700;
  text-transform: uppercase;
  letter-spacing: 0.08em;
  color: rgba(0, 65, 107, 0.45);
}

.button {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.9rem 1.8rem;
  border-radius: 999px;
  background: var(--navy);
  color: #fff;
  text-decoration: none;
  font-weight: 600;
  box-shadow: 0 10px 25px rgba(0, 65, 107, 0.2);
  transition: transform 0.2s;
}
.button:hover { transform: translateY(-2px); }
.button.ghost { background: transparent; color: var(--navy); border: 2px solid rgba(0, 65, 107, 0.2); box-shadow: none; }
.button.round { padding: 0.9rem 1.1rem; }

/* Header */
.site-header { position: fixed; inset: 0 0 auto 0; z-index: 50; transition: background 0.4s, box-shadow 0.4s; }
.site-header.scrolled { background: rgba(255, 255, 255, 0.95); box-shadow: 0 10px 30px rgba(0, 65, 107, 0.06); }
.nav { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; height: 5rem; display: flex; align-items: center; justify-content: space-between; }
.logo { display: flex; align-items: center; gap: 0.75rem; text-decoration: none; font-weight: 600; }
.logo-mark { width: 2.5rem; height: 2.5rem; border-radius: 0.6rem; background: var(--navy); color: #fff; display: grid; place-items: center; font-weight: 700; }
.nav-links { display: flex; align-items: center; gap: 0.5rem; }
.nav-link { padding: 0.6rem 1.2rem; border-radius: 999px; text-decoration: none; font-size: 0.9rem; font-weight: 500; cursor: pointer; list-style: none; }
.nav-link:hover { background: rgba(0, 65, 107, 0.1); }
.nav-link.active { background: var(--navy); color: #fff; }
.nav-social { margin-left: 1rem; padding: 0.6rem 0.8rem; border-radius: 999px; background: rgba(0, 65, 107, 0.1); text-decoration: none; font-weight: 700; }
.dropdown { position: relative; }
.dropdown summary::-webkit-details-marker { display: none; }
.menu { position: absolute; top: calc(100% + 0.5rem); left: 0; width: 14rem; background: #fff; border-radius: 1rem; box-shadow: 0 20px 40px rgba(0, 65, 107, 0.12); overflow: hidden; }
.menu-item { display: flex; gap: 0.75rem; padding: 0.9rem 1.2rem; text-decoration: none; }
.menu-item:hover, .menu-item.active { background: var(--cream); }

/* Sections */
main { min-height: 100vh; }
.section { max-width: 80rem; margin: 0 auto; padding: 8rem 1.5rem 5rem; }
.section.tinted { background: rgba(0, 65, 107, 0.02); max-width: none; }
.section.narrow { max-width: 40rem; }
.center, .section-header { text-align: center; }
.section-header { margin-bottom: 4rem; }
.section-header .muted { max-width: 40rem; margin: 0 auto; }

.grid { display: grid; gap: 1.5rem; }
.grid.two { grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr)); gap: 3rem; }
.grid.four { grid-template-columns: repeat(auto-fill, minmax(15rem, 1fr)); }
.stack { display: flex; flex-direction: column; gap: 1.5rem; }

.card {
  background: #fff;
  border-radius: var(--radius);
  padding: 2rem;
  border: 1px solid var(--line);
  box-shadow: 0 20px 40px rgba(0, 65, 107, 0.05);
  transition: transform 0.3s;
}
.card:hover { transform: translateY(-5px); }

.reveal { opacity: 0; transform: translateY(30px); transition: opacity 0.6s, transform 0.6s; transition-delay: var(--delay, 0ms); }
.reveal.visible { opacity: 1; transform: none; }

/* Hero */
.hero { position: relative; overflow: hidden; min-height: 100vh; display: flex; align-items: center; padding: 6rem 1.5rem 2rem; }
.hero-gear { position: absolute; font-size: 24rem; opacity: 0.03; animation: spin 60s linear infinite; }
.gear-a { top: -5rem; right: -5rem; }
.gear-b { bottom: -8rem; left: -8rem; animation-direction: reverse; animation-duration: 80s; }
@keyframes spin { to { transform: rotate(360deg); } }
.hero-grid { max-width: 80rem; margin: 0 auto; width: 100%; display: grid; grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr)); gap: 4rem; align-items: center; position: relative; }
.hero h1 .accent { color: rgba(0, 65, 107, 0.6); }
.hero-actions { display: flex; gap: 1rem; margin: 2rem 0; }
.stats { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; padding-top: 2rem; border-top: 1px solid rgba(0, 65, 107, 0.1); }
.stat-value { font-size: 2rem; font-weight: 700; margin: 0; }
.ring { aspect-ratio: 1; border-radius: 50%; background: linear-gradient(135deg, var(--navy), rgba(0, 65, 107, 0.8)); display: grid; place-items: center; box-shadow: 0 30px 60px rgba(0, 65, 107, 0.3); }
.portrait { width: 60%; aspect-ratio: 1; border-radius: 50%; overflow: hidden; border: 4px solid rgba(255, 255, 255, 0.3); }
.portrait img { width: 100%; height: 100%; object-fit: cover; }
.portrait.initials { display: grid; place-items: center; color: #fff; font-size: 4rem; font-weight: 700; }

/* Skills */
.skill-icon { width: 3.5rem; height: 3.5rem; border-radius: 1rem; background: var(--accent); color: #fff; display: grid; place-items: center; font-weight: 700; font-size: 1.4rem; margin-bottom: 1.5rem; }
.meter-label { display: flex; justify-content: space-between; font-size: 0.85rem; margin: 1rem 0 0.5rem; }
.meter { height: 0.5rem; background: var(--cream); border-radius: 999px; overflow: hidden; }
.meter-fill { height: 100%; background: var(--accent); border-radius: 999px; }
.extra-skills { margin-top: 4rem; text-align: center; }
.tags { display: flex; flex-wrap: wrap; gap: 0.6rem; justify-content: inherit; }
.extra-skills .tags { justify-content: center; }
.tag { padding: 0.6rem 1.2rem; background: #fff; border-radius: 999px; font-size: 0.85rem; font-weight: 500; box-shadow: 0 4px 12px rgba(0, 65, 107, 0.05); }
.tag.small { padding: 0.25rem 0.75rem; background: rgba(0, 65, 107, 0.05); font-size: 0.75rem; font-weight: 700; box-shadow: none; }

/* Experience */
.timeline { max-width: 80rem; margin: 0 auto; display: flex; flex-direction: column; gap: 3rem; position: relative; }
.timeline-entry { width: 50%; position: relative; }
.timeline-entry.left { padding-right: 4rem; text-align: right; }
.timeline-entry.right { margin-left: 50%; padding-left: 4rem; }
.timeline-node { position: absolute; top: 2rem; width: 1rem; height: 1rem; border-radius: 50%; background: var(--navy); border: 4px solid var(--cream); }
.timeline-entry.left .timeline-node { right: -0.5rem; }
.timeline-entry.right .timeline-node { left: -0.5rem; }
.company { font-weight: 500; color: var(--muted); }
.meta { display: flex; gap: 0.75rem; margin: 1rem 0; justify-content: inherit; }
.timeline-entry.left .meta { justify-content: flex-end; }
.chip { padding: 0.35rem 0.8rem; border-radius: 999px; background: var(--cream); font-size: 0.85rem; }
.chip.soft { background: rgba(0, 65, 107, 0.1); }
.achievements { list-style: none; padding: 0; margin: 0; font-size: 0.9rem; }
.arrow { color: rgba(0, 65, 107, 0.4); margin: 0 0.5rem; }

/* Projects */
.category-header { display: flex; gap: 1.5rem; align-items: center; margin-bottom: 3rem; }
.category-icon { width: 4rem; height: 4rem; border-radius: 1rem; background: var(--navy); color: #fff; display: grid; place-items: center; font-size: 2rem; }
.spotlight { display: grid; grid-template-columns: 3fr 2fr; background: #fff; border-radius: 2rem; overflow: hidden; margin-bottom: 4rem; box-shadow: 0 20px 40px rgba(0, 65, 107, 0.05); }
.spotlight-details { padding: 2.5rem; }
.details { display: flex; flex-direction: column; gap: 1.5rem; margin-top: 1.5rem; }
.details p { margin: 0; color: rgba(0, 65, 107, 0.8); }
.expandable summary { list-style: none; cursor: pointer; color: rgba(0, 65, 107, 0.8); }
.expandable summary::-webkit-details-marker { display: none; }
.expandable .toggle::after { content: " Read More"; font-size: 0.75rem; font-weight: 700; text-transform: uppercase; }
.expandable[open] .preview { display: none; }
.expandable[open] .toggle::after { content: "Read Less"; }
.gallery-header { display: flex; justify-content: space-between; align-items: baseline; margin-bottom: 1.5rem; }
.project-card { padding: 0; overflow: hidden; text-decoration: none; border: 2px solid transparent; display: flex; flex-direction: column; }
.project-card.selected { border-color: var(--navy); box-shadow: 0 0 0 4px rgba(0, 65, 107, 0.1); }
.card-image { height: 10rem; position: relative; background: #f3f4f6; overflow: hidden; }
.card-image img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.5s; }
.project-card:hover .card-image img { transform: scale(1.1); }
.badge-3d { position: absolute; top: 0.5rem; right: 0.5rem; background: var(--navy); color: #fff; padding: 0.2rem 0.5rem; border-radius: 0.5rem; font-size: 0.75rem; font-weight: 700; }
.viewing { position: absolute; inset: 0; background: rgba(0, 65, 107, 0.8); color: #fff; display: grid; place-items: center; font-weight: 700; letter-spacing: 0.15em; text-transform: uppercase; }
.card-body { padding: 1.25rem; }
.more { font-size: 0.75rem; font-weight: 700; color: rgba(0, 65, 107, 0.5); }

/* Carousel */
.carousel { position: relative; width: 100%; height: 100%; min-height: 400px; background: #f9fafb; outline: none; overflow: hidden; }
.carousel:focus-visible { box-shadow: inset 0 0 0 3px rgba(0, 65, 107, 0.3); }
.carousel.empty { display: grid; place-items: center; }
.carousel-nav { position: absolute; top: 50%; transform: translateY(-50%); z-index: 20; width: 2.5rem; height: 2.5rem; border-radius: 50%; background: rgba(255, 255, 255, 0.9); display: grid; place-items: center; text-decoration: none; font-size: 1.5rem; box-shadow: 0 2px 6px rgba(0, 0, 0, 0.1); }
.carousel-nav.prev { left: 0.75rem; }
.carousel-nav.next { right: 0.75rem; }
.stage { position: absolute; inset: 0; }
.stage-image, .facade-preview, .player { width: 100%; height: 100%; object-fit: cover; border: 0; }
.kind-badge { position: absolute; top: 1rem; left: 1rem; z-index: 10; background: rgba(255, 255, 255, 0.8); padding: 0.3rem 0.75rem; border-radius: 0.5rem; font-size: 0.75rem; font-weight: 700; pointer-events: none; }
.facade { display: block; position: relative; width: 100%; height: 100%; }
.badge-preview { display: grid; place-items: center; background: #eaf2f6; font-size: 3rem; font-weight: 700; }
.facade-cta { position: absolute; left: 50%; top: 50%; transform: translate(-50%, -50%); padding: 0.8rem 1.6rem; border-radius: 999px; background: var(--navy); color: #fff; font-weight: 600; box-shadow: 0 10px 25px rgba(0, 65, 107, 0.3); }
.model-stage { position: relative; width: 100%; height: 100%; touch-action: none; }
.model-stage canvas { display: block; }
.model-placeholder { position: absolute; left: 50%; top: 50%; transform: translate(-50%, -50%); background: rgba(255, 255, 255, 0.9); padding: 1rem; border-radius: 0.75rem; display: flex; flex-direction: column; align-items: center; gap: 0.5rem; }
.model-placeholder .blurred { width: 128px; height: 128px; object-fit: cover; filter: blur(8px); border-radius: 8px; }
.progress { font-weight: 700; font-size: 1.1rem; }
.capture { position: absolute; top: 1rem; right: 1rem; z-index: 10; padding: 0.4rem 0.8rem; border-radius: 0.5rem; border: 1px solid var(--line); background: rgba(255, 255, 255, 0.9); color: var(--navy); font-weight: 700; font-size: 0.75rem; cursor: pointer; }
.caption { position: absolute; left: 0; right: 0; bottom: 3.5rem; z-index: 25; margin: 0; padding: 0.5rem 1rem; text-align: center; font-size: 0.85rem; color: #fff; background: linear-gradient(to top, rgba(0, 65, 107, 0.6), transparent); pointer-events: none; }
.counter { position: absolute; top: 1rem; right: 4.5rem; z-index: 10; background: rgba(0, 65, 107, 0.75); color: #fff; padding: 0.3rem 0.6rem; border-radius: 0.5rem; font-size: 0.75rem; font-weight: 700; pointer-events: none; }
.strip { position: absolute; left: 50%; bottom: 1rem; transform: translateX(-50%); z-index: 30; display: flex; gap: 0.5rem; }
.strip-item { width: 3rem; height: 2rem; border-radius: 0.4rem; overflow: hidden; border: 2px solid transparent; background: #fff; display: grid; place-items: center; text-decoration: none; }
.strip-item.current { border-color: var(--navy); }
.strip-item img { width: 100%; height: 100%; object-fit: cover; }
.strip-badge { font-size: 0.7rem; font-weight: 700; }

/* Contact */
.contact-card { display: flex; gap: 1.25rem; align-items: flex-start; text-decoration: none; }
.contact-icon { width: 3.5rem; height: 3.5rem; flex-shrink: 0; border-radius: 1rem; display: grid; place-items: center; color: #fff; font-size: 1.4rem; font-weight: 700; }
.contact-icon.navy { background: var(--navy); }
.contact-icon.green { background: #10b981; }
.contact-icon.amber { background: #f59e0b; }
.contact-icon.glass { background: rgba(255, 255, 255, 0.2); }
.contact-card.linkedin { background: var(--navy); color: #fff; }
.plain { list-style: none; padding: 0; margin: 0; display: flex; flex-direction: column; gap: 0.75rem; }
.dot { display: inline-block; width: 0.5rem; height: 0.5rem; border-radius: 50%; background: var(--navy); margin-right: 0.75rem; }
.dot.live { background: #10b981; animation: pulse 2s infinite; }
@keyframes pulse { 50% { opacity: 0.4; } }

/* Footer */
.site-footer { background: var(--navy); color: #fff; padding: 4rem 1.5rem; }
.site-footer .muted { color: rgba(255, 255, 255, 0.6); }
.site-footer .logo-mark { background: rgba(255, 255, 255, 0.2); }
.footer-inner { max-width: 80rem; margin: 0 auto; display: flex; flex-wrap: wrap; gap: 2rem; justify-content: space-between; align-items: center; }
.footer-links { display: flex; gap: 1.5rem; font-size: 0.9rem; }
.footer-links a { color: rgba(255, 255, 255, 0.7); text-decoration: none; }
.footer-social { display: flex; gap: 1rem; }
.footer-social a { width: 2.75rem; height: 2.75rem; border-radius: 50%; background: rgba(255, 255, 255, 0.1); display: grid; place-items: center; text-decoration: none; font-weight: 700; }
.footer-social .to-top { background: #fff; color: var(--navy); margin-left: 1rem; }

@media (max-width: 900px) {
  .nav-links .nav-link, .nav-social { padding: 0.5rem 0.7rem; }
  .logo-text { display: none; }
  .spotlight { grid-template-columns: 1fr; }
  .timeline-entry, .timeline-entry.right { width: 100%; margin-left: 0; padding: 0; text-align: left; }
  .timeline-node { display: none; }
  .timeline-entry.left .meta { justify-content: flex-start; }
}
"##;
